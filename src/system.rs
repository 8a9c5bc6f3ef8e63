// Particle state: parallel position and velocity arrays.

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

use crate::error::{Error, Result};

/// The simulation state: N positions and N velocities, index-correlated.
///
/// Particles carry no identity beyond their index; insertion order is
/// preserved across every step. N is fixed at construction, and after
/// any advancing call every position lies inside `[0, L)` on both axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub positions: Vec<DVec2>,
    pub velocities: Vec<DVec2>,
}

impl ParticleSystem {
    /// Build a system from parallel arrays, rejecting mismatched lengths.
    pub fn new(positions: Vec<DVec2>, velocities: Vec<DVec2>) -> Result<Self> {
        if positions.len() != velocities.len() {
            return Err(Error::CountMismatch {
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }
        Ok(Self { positions, velocities })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Re-check the parallel-array invariant. The fields are public, so
    /// the engine revalidates at its boundary rather than trusting the
    /// constructor alone.
    pub fn check_counts(&self) -> Result<()> {
        if self.positions.len() != self.velocities.len() {
            return Err(Error::CountMismatch {
                positions: self.positions.len(),
                velocities: self.velocities.len(),
            });
        }
        Ok(())
    }
}
