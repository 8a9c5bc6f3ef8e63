//! Step-loop orchestration: force -> integrate -> wrap, repeated.

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::periodic;
use crate::profile_scope;
use crate::system::ParticleSystem;

use super::{forces, integrator};

/// Advance the system by `nsteps` Euler steps of length `dt`.
///
/// Each step computes pairwise forces on the current positions, applies
/// one Euler update, then wraps every position back into `[0, L)^2`.
/// The engine keeps no state between calls: the result is a pure fold
/// over the inputs, and `nsteps == 0` returns the system unchanged.
///
/// Validation runs before any step, so a call either completes all
/// `nsteps` steps or fails without touching the state.
pub fn advance(
    system: &mut ParticleSystem,
    nsteps: usize,
    dt: f64,
    config: &SimConfig,
) -> Result<()> {
    config.validate()?;
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(Error::InvalidConfig(format!(
            "dt must be a positive finite time step, got {dt}"
        )));
    }
    system.check_counts()?;

    profile_scope!("advance");
    for _ in 0..nsteps {
        let forces = forces::compute_forces(&system.positions, config);
        integrator::euler_step(system, &forces, dt, config.mass);
        for pos in &mut system.positions {
            *pos = periodic::wrap(*pos, config.box_length);
        }
    }
    Ok(())
}
