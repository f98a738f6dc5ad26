//! Error types for simulation setup.
//!
//! Nothing in the running frame pipeline returns an error; failed spawn
//! placement and blocked movement are ordinary outcomes. Errors only arise
//! while validating configuration before a simulation starts.

use thiserror::Error;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The arena cannot hold a single unit.
    #[error("arena {width}x{height} is smaller than a unit ({unit})")]
    ArenaTooSmall { width: f64, height: f64, unit: f64 },

    /// Arena dimensions must be finite.
    #[error("arena dimensions must be finite, got {width}x{height}")]
    NonFiniteArena { width: f64, height: f64 },

    #[error("spawn interval must be positive")]
    ZeroSpawnInterval,

    #[error("maximum concurrent enemies must be at least 1")]
    ZeroMaxEnemies,
}
