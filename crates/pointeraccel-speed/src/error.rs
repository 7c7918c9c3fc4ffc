//! Error types for speed calculation setup.

use pointeraccel_curves::AccelError;

/// Error type for speed calculator and settings operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeedError {
    /// A speed argument failed validation.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// The acceleration half of the settings was rejected.
    #[error(transparent)]
    Accel(#[from] AccelError),

    /// Settings could not be parsed from their serialized form.
    #[error("Invalid speed config: {0}")]
    Config(String),
}
