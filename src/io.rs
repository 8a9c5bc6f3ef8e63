//! Snapshot persistence for simulation state.
//!
//! Two encodings: pretty JSON for inspection and diffing, and
//! gzip-compressed bincode for compact checkpoints.

use std::io::{Read, Write};
use std::path::Path;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::Result;
use crate::system::ParticleSystem;

/// Everything needed to resume or inspect a run: the particle state,
/// the parameters it was produced under, and how many Euler steps it
/// has absorbed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub system: ParticleSystem,
    pub config: SimConfig,
    #[serde(default)]
    pub elapsed_steps: u64,
}

impl SimulationState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_compressed_bytes(&self) -> Result<Vec<u8>> {
        let raw = bincode::serialize(self)?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        Ok(encoder.finish()?)
    }

    pub fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let mut decoder = GzDecoder::new(bytes);
        let mut raw = Vec::new();
        decoder.read_to_end(&mut raw)?;
        Ok(bincode::deserialize(&raw)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn save_compressed<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_compressed_bytes()?)?;
        Ok(())
    }

    pub fn load_compressed<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_compressed_bytes(&std::fs::read(path)?)
    }
}
