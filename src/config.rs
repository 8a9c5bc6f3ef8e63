// Physics configuration shared read-only by every engine call.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::units;

/// Immutable simulation parameters.
///
/// Owned by the caller and passed by reference into every engine call;
/// the engine never mutates it and holds no copy between calls. Defaults
/// describe a dilute 2D argon toy system in SI units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Side length of the periodic square box (m).
    pub box_length: f64,
    /// Integration time step (s).
    pub dt: f64,
    /// Temperature used only by the initial-condition samplers (K).
    pub temperature: f64,
    /// Lennard-Jones well depth epsilon (J).
    pub epsilon: f64,
    /// Lennard-Jones size parameter sigma (m).
    pub sigma: f64,
    /// Particle mass (kg).
    pub mass: f64,
    /// Boltzmann constant (J/K). Configurable so reduced-unit runs stay
    /// self-consistent without touching the engine.
    pub boltzmann: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            box_length: 1.0e-6,
            dt: 1.0e-11,
            temperature: 300.0,
            epsilon: units::ARGON_LJ_EPSILON,
            sigma: units::ARGON_LJ_SIGMA,
            mass: units::ARGON_MASS,
            boltzmann: units::BOLTZMANN,
        }
    }
}

impl SimConfig {
    /// Reject parameter sets the engine cannot run with. Called at the
    /// boundary of `advance` and `total_energy`, before any step runs.
    pub fn validate(&self) -> Result<()> {
        if !(self.box_length > 0.0) || !self.box_length.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "box_length must be a positive finite length, got {}",
                self.box_length
            )));
        }
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "dt must be a positive finite time step, got {}",
                self.dt
            )));
        }
        if !(self.mass > 0.0) || !self.mass.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "mass must be a positive finite mass, got {}",
                self.mass
            )));
        }
        if !(self.sigma > 0.0) || !self.sigma.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "sigma must be a positive finite length, got {}",
                self.sigma
            )));
        }
        if !(self.epsilon >= 0.0) || !self.epsilon.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "epsilon must be a non-negative finite energy, got {}",
                self.epsilon
            )));
        }
        if !(self.temperature >= 0.0) || !self.temperature.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "temperature must be a non-negative finite temperature, got {}",
                self.temperature
            )));
        }
        if !(self.boltzmann > 0.0) || !self.boltzmann.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "boltzmann must be a positive finite constant, got {}",
                self.boltzmann
            )));
        }
        Ok(())
    }

    /// Thermal velocity scale sqrt(kB T / m) used by the samplers (m/s).
    pub fn thermal_velocity(&self) -> f64 {
        (self.boltzmann * self.temperature / self.mass).sqrt()
    }
}
