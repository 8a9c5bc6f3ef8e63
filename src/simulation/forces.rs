//! Lennard-Jones force and potential evaluation.
//!
//! All-pairs over minimum-image displacements, O(N^2) per evaluation.
//! There is no cutoff radius or neighbor list; N is small enough that
//! the plain pair loop wins on simplicity, and keeping it an explicit
//! index iteration leaves room to add a cutoff later without touching
//! the integrator.

use ultraviolet::DVec2;

use crate::config::SimConfig;
use crate::periodic;
use crate::profile_scope;

/// Net Lennard-Jones force on every particle.
///
/// For each unordered pair the force `24 eps (2 (sigma/r)^12 - (sigma/r)^6) / r^2 * r_vec`
/// is accumulated onto `i` and its negation onto `j`, so the system-wide
/// sum is exactly zero. The `r^-12` term overflows as r approaches 0; that
/// is left uncorrected on purpose. A non-finite result is the signal
/// that two particles have coincided, and clamping would hide it.
pub fn compute_forces(positions: &[DVec2], config: &SimConfig) -> Vec<DVec2> {
    profile_scope!("lj_forces");
    let mut forces = vec![DVec2::zero(); positions.len()];
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let r_vec = periodic::min_image(positions[i], positions[j], config.box_length);
            let r2 = r_vec.mag_sq();
            let sr2 = (config.sigma * config.sigma) / r2;
            let sr6 = sr2 * sr2 * sr2;
            let sr12 = sr6 * sr6;
            let f_over_r2 = 24.0 * config.epsilon * (2.0 * sr12 - sr6) / r2;
            let f = r_vec * f_over_r2;
            forces[i] += f;
            forces[j] -= f;
        }
    }
    forces
}

/// Total Lennard-Jones potential energy of the configuration.
///
/// Uses the same pair enumeration and minimum-image logic as
/// [`compute_forces`] so the force stays the exact negative gradient of
/// the energy reported here.
pub fn potential_energy(positions: &[DVec2], config: &SimConfig) -> f64 {
    let mut energy = 0.0;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let r_vec = periodic::min_image(positions[i], positions[j], config.box_length);
            let r2 = r_vec.mag_sq();
            let sr2 = (config.sigma * config.sigma) / r2;
            let sr6 = sr2 * sr2 * sr2;
            let sr12 = sr6 * sr6;
            energy += 4.0 * config.epsilon * (sr12 - sr6);
        }
    }
    energy
}
