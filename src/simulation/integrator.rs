//! Forward-Euler time integration.

use ultraviolet::DVec2;

use crate::system::ParticleSystem;

/// Advance positions and velocities by one explicit Euler step.
///
/// Plain forward Euler: the position update uses the pre-update
/// velocity, not the freshly kicked one (that would be semi-implicit
/// Euler, a different scheme). First-order and not symplectic: energy
/// drift over long runs is expected and is exactly what the energy
/// trace is there to observe.
///
/// Periodic wrapping is not applied here; the engine wraps positions
/// immediately after each step.
pub fn euler_step(system: &mut ParticleSystem, forces: &[DVec2], dt: f64, mass: f64) {
    for i in 0..system.positions.len() {
        let v_old = system.velocities[i];
        system.positions[i] += v_old * dt;
        system.velocities[i] += forces[i] * (dt / mass);
    }
}
