//! Energy bookkeeping and the per-run energy trace.

use std::fmt::Write as _;
use std::path::Path;

use ultraviolet::DVec2;

use crate::config::SimConfig;
use crate::error::Result;
use crate::simulation::forces;
use crate::system::ParticleSystem;

/// Total kinetic energy, sum of 1/2 m |v|^2 (J).
pub fn kinetic_energy(velocities: &[DVec2], mass: f64) -> f64 {
    velocities.iter().map(|v| 0.5 * mass * v.mag_sq()).sum()
}

/// Total energy (kinetic + Lennard-Jones potential) of a snapshot (J).
///
/// Pure observation point: recomputed from scratch on every call and
/// never invoked inside the step loop, which only needs forces. A
/// non-finite value is returned as-is: it signals that the system has
/// left its valid physical regime (particles collided), not that the
/// call failed.
pub fn total_energy(system: &ParticleSystem, config: &SimConfig) -> Result<f64> {
    config.validate()?;
    system.check_counts()?;
    Ok(kinetic_energy(&system.velocities, config.mass)
        + forces::potential_energy(&system.positions, config))
}

/// One recorded observation of the energy diagnostic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyRow {
    pub iteration: usize,
    /// Simulated time at the observation (s).
    pub time: f64,
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergyRow {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Energy-vs-time trace accumulated by the outer driver loop and
/// exported as CSV.
#[derive(Clone, Debug, Default)]
pub struct EnergyTrace {
    rows: Vec<EnergyRow>,
}

impl EnergyTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, iteration: usize, time: f64, kinetic: f64, potential: f64) {
        self.rows.push(EnergyRow { iteration, time, kinetic, potential });
    }

    pub fn rows(&self) -> &[EnergyRow] {
        &self.rows
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("iteration,time_s,kinetic_j,potential_j,total_j\n");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{},{:e},{:e},{:e},{:e}",
                row.iteration,
                row.time,
                row.kinetic,
                row.potential,
                row.total()
            );
        }
        out
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }
}
