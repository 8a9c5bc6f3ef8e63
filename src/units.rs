//! Physical constants in SI units.
//!
//! The engine itself is unit-agnostic; these constants only seed the
//! default [`SimConfig`](crate::config::SimConfig) with an argon-like
//! parameter set. Any self-consistent unit system works.

/// Boltzmann constant in J/K.
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// Atomic mass unit in kilograms.
pub const AMU: f64 = 1.660_539_066_60e-27;
/// Mass of one argon atom in kilograms (39.948 amu).
pub const ARGON_MASS: f64 = 39.948 * AMU;
/// Lennard-Jones well depth for argon in joules (epsilon/kB ~ 119.8 K).
pub const ARGON_LJ_EPSILON: f64 = 119.8 * BOLTZMANN;
/// Lennard-Jones size parameter for argon in meters.
pub const ARGON_LJ_SIGMA: f64 = 3.405e-10;
