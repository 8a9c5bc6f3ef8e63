// Engine property tests: force symmetry, identity advance, gradient
// consistency, and the two-body repulsive scenario.

use ultraviolet::DVec2;

use super::{advance, forces};
use crate::config::SimConfig;
use crate::diagnostics;
use crate::error::Error;
use crate::sampler::InitialCondition;
use crate::system::ParticleSystem;

/// Reduced-unit parameter set: the engine is unit-agnostic, so tests
/// that only probe the math use O(1) numbers.
fn reduced_config() -> SimConfig {
    SimConfig {
        box_length: 12.0,
        dt: 1.0e-3,
        temperature: 1.0,
        epsilon: 1.0,
        sigma: 1.0,
        mass: 1.0,
        boltzmann: 1.0,
    }
}

#[test]
fn pair_forces_are_equal_and_opposite() {
    let config = SimConfig { sigma: 0.5, ..reduced_config() };
    let positions = vec![DVec2::new(5.0, 6.0), DVec2::new(5.6, 6.0)];
    let forces = forces::compute_forces(&positions, &config);
    assert!(forces[0].mag() > 0.0, "particles this close must interact");
    // Exact negation, not approximate: the same product is accumulated
    // with flipped sign on each side of the pair.
    assert_eq!(forces[0] + forces[1], DVec2::zero());
}

#[test]
fn net_force_is_negligible_for_many_particles() {
    let config = reduced_config();
    let positions = vec![
        DVec2::new(1.0, 1.0),
        DVec2::new(2.1, 1.4),
        DVec2::new(3.3, 2.9),
        DVec2::new(1.7, 3.6),
        DVec2::new(2.8, 2.2),
    ];
    let forces = forces::compute_forces(&positions, &config);
    let net: DVec2 = forces.iter().fold(DVec2::zero(), |acc, f| acc + *f);
    let scale = forces.iter().map(|f| f.mag()).fold(0.0f64, f64::max);
    assert!(net.mag() <= scale * 1.0e-12, "net force {net:?} vs scale {scale}");
}

#[test]
fn zero_steps_is_identity() {
    let config = reduced_config();
    let mut system = ParticleSystem::new(
        vec![DVec2::new(1.0, 2.0), DVec2::new(4.0, 5.0)],
        vec![DVec2::new(0.3, -0.1), DVec2::new(-0.2, 0.4)],
    )
    .unwrap();
    let before = system.clone();
    advance(&mut system, 0, config.dt, &config).unwrap();
    assert_eq!(system, before);
}

#[test]
fn advance_rejects_invalid_inputs_before_stepping() {
    let mut system = ParticleSystem::new(
        vec![DVec2::new(1.0, 2.0)],
        vec![DVec2::zero()],
    )
    .unwrap();
    let before = system.clone();

    let bad_box = SimConfig { box_length: -1.0, ..reduced_config() };
    assert!(matches!(
        advance(&mut system, 5, 1.0e-3, &bad_box),
        Err(Error::InvalidConfig(_))
    ));

    let config = reduced_config();
    assert!(matches!(
        advance(&mut system, 5, 0.0, &config),
        Err(Error::InvalidConfig(_))
    ));

    system.velocities.push(DVec2::zero());
    assert!(matches!(
        advance(&mut system, 5, 1.0e-3, &config),
        Err(Error::CountMismatch { .. })
    ));
    system.velocities.pop();

    // Failed calls never ran a step.
    assert_eq!(system, before);
}

#[test]
fn force_matches_negative_energy_gradient() {
    let config = reduced_config();
    let positions = vec![
        DVec2::new(1.0, 1.0),
        DVec2::new(2.2, 1.3),
        DVec2::new(4.0, 3.1),
    ];
    let forces = forces::compute_forces(&positions, &config);

    let h = 1.0e-6;
    for i in 0..positions.len() {
        for axis in 0..2 {
            let mut plus = positions.clone();
            let mut minus = positions.clone();
            if axis == 0 {
                plus[i].x += h;
                minus[i].x -= h;
            } else {
                plus[i].y += h;
                minus[i].y -= h;
            }
            let grad = (forces::potential_energy(&plus, &config)
                - forces::potential_energy(&minus, &config))
                / (2.0 * h);
            let force = if axis == 0 { forces[i].x } else { forces[i].y };
            // F = -dU/dx, central differences to O(h^2).
            assert!(
                (grad + force).abs() < 1.0e-6 * force.abs().max(1.0),
                "particle {i} axis {axis}: -grad {} vs force {force}",
                -grad
            );
        }
    }
}

#[test]
fn two_body_repulsive_step_separates_symmetrically() {
    // Two argon-mass particles 0.2 L apart with sigma chosen inside the
    // repulsive core (sigma/r = 1.05), starting at rest on the x-axis.
    let l = 1.0e-6;
    let config = SimConfig {
        box_length: l,
        dt: 1.0e-12,
        sigma: 2.1e-7,
        ..SimConfig::default()
    };
    let x0 = 0.4 * l;
    let x1 = 0.6 * l;
    let y = 0.5 * l;
    let mut system = ParticleSystem::new(
        vec![DVec2::new(x0, y), DVec2::new(x1, y)],
        vec![DVec2::zero(), DVec2::zero()],
    )
    .unwrap();

    let e0 = diagnostics::total_energy(&system, &config).unwrap();
    assert!(e0 > 0.0, "separation inside the core must have positive energy");

    advance(&mut system, 1, config.dt, &config).unwrap();

    // Forward Euler: the first step kicks velocities but moves positions
    // with the pre-step (zero) velocity.
    assert!(system.velocities[0].x < 0.0);
    assert!(system.velocities[1].x > 0.0);
    assert_eq!(system.velocities[0].x, -system.velocities[1].x);
    assert_eq!(system.velocities[0].y, 0.0);
    assert_eq!(system.velocities[1].y, 0.0);
    assert_eq!(system.positions[0], DVec2::new(x0, y));
    assert_eq!(system.positions[1], DVec2::new(x1, y));

    advance(&mut system, 1, config.dt, &config).unwrap();

    // Now the particles have moved apart along x, mirror-symmetrically,
    // with neither y coordinate touched.
    let d0 = system.positions[0].x - x0;
    let d1 = system.positions[1].x - x1;
    assert!(d0 < 0.0 && d1 > 0.0, "particles should separate, got {d0} and {d1}");
    assert!((d0 + d1).abs() < 1.0e-20);
    assert_eq!(system.positions[0].y, y);
    assert_eq!(system.positions[1].y, y);

    // Euler is not energy-conserving; the drift must be small but real.
    let e2 = diagnostics::total_energy(&system, &config).unwrap();
    let drift = (e2 - e0).abs();
    assert!(drift > 0.0);
    assert!(drift < 0.02 * e0, "drift {drift} too large vs e0 {e0}");
}

#[test]
fn advance_is_bit_for_bit_deterministic() {
    let config = SimConfig::default();
    let system = InitialCondition::MaxwellBoltzmann
        .sample(8, &config, 7)
        .unwrap();
    let mut a = system.clone();
    let mut b = system;
    advance(&mut a, 25, config.dt, &config).unwrap();
    advance(&mut b, 25, config.dt, &config).unwrap();
    assert_eq!(a, b);

    let ea = diagnostics::total_energy(&a, &config).unwrap();
    let eb = diagnostics::total_energy(&b, &config).unwrap();
    assert_eq!(ea.to_bits(), eb.to_bits());
}

#[test]
fn positions_stay_inside_the_box() {
    let config = SimConfig::default();
    let mut system = InitialCondition::UniformNaive
        .sample(10, &config, 3)
        .unwrap();
    advance(&mut system, 200, config.dt, &config).unwrap();
    for pos in &system.positions {
        assert!((0.0..config.box_length).contains(&pos.x), "x escaped: {}", pos.x);
        assert!((0.0..config.box_length).contains(&pos.y), "y escaped: {}", pos.y);
    }
}
