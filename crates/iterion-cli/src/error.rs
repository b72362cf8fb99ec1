//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Interval bounds are out of order.
    #[error("Invalid interval: low ({0}) must be less than high ({1})")]
    InvalidInterval(f64, f64),

    /// Non-positive tolerance.
    #[error("Invalid tolerance: {0}. Must be positive.")]
    InvalidTolerance(f64),

    /// Zero segment count.
    #[error("Invalid segment count: {0}. Must be at least 1.")]
    InvalidSegments(u32),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
