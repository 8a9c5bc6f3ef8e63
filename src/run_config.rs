// run_config.rs
// Handles loading and parsing the outer-loop run configuration from lj2d.toml.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::sampler::InitialCondition;

/// Driver configuration: what to simulate and for how long.
///
/// Every field has a default, so a missing file or an empty table runs
/// the stock dilute-argon scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of particles to sample.
    pub particles: usize,
    /// Outer iterations; one energy observation per iteration.
    pub iterations: usize,
    /// Simulated time covered by each outer iteration (s).
    pub run_time: f64,
    /// Initial-condition strategy.
    pub sampler: InitialCondition,
    /// RNG seed for the sampler.
    pub seed: u64,
    /// Destination of the energy-trace CSV.
    pub output: PathBuf,
    /// Optional compressed checkpoint of the final state.
    pub checkpoint: Option<PathBuf>,
    /// Physics parameters; omitted fields fall back to argon defaults.
    pub physics: SimConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            particles: 10,
            iterations: 100,
            run_time: 1.0e-9,
            sampler: InitialCondition::default(),
            seed: 0,
            output: PathBuf::from("energy_trace.csv"),
            checkpoint: None,
            physics: SimConfig::default(),
        }
    }
}

impl RunConfig {
    pub const DEFAULT_PATH: &'static str = "lj2d.toml";

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn load_default() -> Result<Self> {
        Self::load_from_file(Self::DEFAULT_PATH)
    }

    /// Euler steps per outer iteration, `round(run_time / dt)`.
    pub fn steps_per_iteration(&self) -> usize {
        (self.run_time / self.physics.dt).round() as usize
    }

    pub fn validate(&self) -> Result<()> {
        self.physics.validate()?;
        if !(self.run_time > 0.0) || !self.run_time.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "run_time must be a positive finite time, got {}",
                self.run_time
            )));
        }
        Ok(())
    }
}
