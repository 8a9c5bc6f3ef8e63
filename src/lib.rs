pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod periodic;
pub mod profiler;
pub mod run_config;
pub mod sampler;
pub mod simulation;
pub mod system;
pub mod units;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
