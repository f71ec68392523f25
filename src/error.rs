//! Error types for spikeplane

use thiserror::Error;

/// Spikeplane error type
///
/// The engine has exactly one failure condition: a configuration that cannot
/// produce a well-defined run. Validation happens once at call entry, before
/// any stepping, so failures are fast and side-effect-free.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Timing or drive configuration rejected at call entry
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SimulationError {
    /// Shorthand constructor for configuration rejections
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
