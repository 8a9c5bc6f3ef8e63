//! Initial-condition sampling strategies.
//!
//! Sampling is a data-generation concern, deliberately kept out of the
//! engine: `advance` accepts any state satisfying the `ParticleSystem`
//! invariants, however it was produced.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::system::ParticleSystem;

/// Swappable initial-condition strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialCondition {
    /// Uniform positions in the box; velocities drawn per component as
    /// `sqrt(kT/m) - 2 sqrt(kT/m) * u` with u uniform in [0, 1).
    ///
    /// That offset scheme is crude on purpose: the resulting
    /// distribution is uniform rather than Gaussian and its mean is not
    /// tied to equipartition. It is kept bit-for-bit so existing energy
    /// traces remain comparable; prefer `MaxwellBoltzmann` when
    /// physically sensible draws matter.
    #[default]
    UniformNaive,
    /// Uniform positions; velocities from Normal(0, sqrt(kT/m)) per
    /// component with center-of-mass drift removed.
    MaxwellBoltzmann,
}

impl InitialCondition {
    /// Draw `n` particles for the given parameters. Deterministic for a
    /// fixed `seed`.
    pub fn sample(&self, n: usize, config: &SimConfig, seed: u64) -> Result<ParticleSystem> {
        config.validate()?;
        fastrand::seed(seed);
        let positions = uniform_positions(n, config.box_length);
        let velocities = match self {
            Self::UniformNaive => naive_offset_velocities(n, config.thermal_velocity()),
            Self::MaxwellBoltzmann => {
                maxwell_boltzmann_velocities(n, config.thermal_velocity(), seed)?
            }
        };
        ParticleSystem::new(positions, velocities)
    }
}

fn uniform_positions(n: usize, box_length: f64) -> Vec<DVec2> {
    (0..n)
        .map(|_| DVec2::new(fastrand::f64() * box_length, fastrand::f64() * box_length))
        .collect()
}

fn naive_offset_velocities(n: usize, scale: f64) -> Vec<DVec2> {
    (0..n)
        .map(|_| {
            DVec2::new(
                scale - 2.0 * scale * fastrand::f64(),
                scale - 2.0 * scale * fastrand::f64(),
            )
        })
        .collect()
}

fn maxwell_boltzmann_velocities(n: usize, scale: f64, seed: u64) -> Result<Vec<DVec2>> {
    let normal =
        Normal::new(0.0, scale).map_err(|e| Error::InvalidConfig(format!("velocity scale: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut velocities: Vec<DVec2> = (0..n)
        .map(|_| DVec2::new(normal.sample(&mut rng), normal.sample(&mut rng)))
        .collect();

    // Remove center-of-mass motion so the sampled gas has no net drift.
    if n > 0 {
        let mean = velocities.iter().fold(DVec2::zero(), |acc, v| acc + *v) / n as f64;
        for v in &mut velocities {
            *v -= mean;
        }
    }
    Ok(velocities)
}
