//! Error types for acceleration curve construction.

/// Error type for acceleration curve operations.
///
/// Curves are validated once, when they are built from [`AccelArgs`](crate::AccelArgs).
/// Evaluation never fails; degenerate inputs produce `Inf`/`NaN` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccelError {
    /// An argument failed construction-time validation.
    ///
    /// The payload is a fixed, human-readable message such as
    /// `"limit must be greater than 1"`.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// Arguments could not be parsed from their serialized form.
    #[error("Invalid acceleration config: {0}")]
    Config(String),
}
