use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the engine, samplers, and the config/snapshot I/O.
///
/// Invalid inputs are rejected at the `advance`/`total_energy` boundary
/// before any step runs; a call either completes in full or fails here.
#[derive(Debug, Error)]
pub enum Error {
    /// A physics parameter that the engine cannot run with (L <= 0, dt <= 0, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Position and velocity arrays of different lengths.
    #[error("particle count mismatch: {positions} positions vs {velocities} velocities")]
    CountMismatch { positions: usize, velocities: usize },

    /// Propagated I/O errors from config files, snapshots, and CSV export.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Run configuration file failed to parse.
    #[error("run config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON snapshot encode/decode failure.
    #[error("json snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary snapshot encode/decode failure.
    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),
}
