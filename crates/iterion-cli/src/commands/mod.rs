//! CLI command implementations.

pub mod linear;
pub mod root;

// Re-export argument structs for convenience
pub use linear::LinearArgs;
pub use root::RootArgs;

use crate::error::{CliError, CliResult};

/// Validates that an interval is properly ordered.
pub fn validate_interval(low: f64, high: f64) -> CliResult<(f64, f64)> {
    if low >= high {
        return Err(CliError::InvalidInterval(low, high));
    }
    Ok((low, high))
}

/// Validates a tolerance value.
pub fn validate_tolerance(tolerance: f64) -> CliResult<f64> {
    if tolerance <= 0.0 {
        return Err(CliError::InvalidTolerance(tolerance));
    }
    Ok(tolerance)
}

/// Validates a segment count.
pub fn validate_segments(segments: u32) -> CliResult<u32> {
    if segments == 0 {
        return Err(CliError::InvalidSegments(segments));
    }
    Ok(segments)
}
