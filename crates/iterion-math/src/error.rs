//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Neither the function nor its derivative changes sign over the
    /// interval, or a derivative-mode candidate failed validation against
    /// the original function.
    #[error("The scalars {a} and {b} do not bound a root")]
    NotBracketed {
        /// Lower bound of the interval.
        a: f64,
        /// Upper bound of the interval.
        b: f64,
    },

    /// The requested tolerance cannot produce a meaningful iteration bound.
    #[error("Invalid tolerance {tolerance:.2e} for interval width {width:.2e}")]
    InvalidTolerance {
        /// The requested tolerance.
        tolerance: f64,
        /// Width of the search interval.
        width: f64,
    },

    /// The matrix cannot be permuted into diagonally dominant form.
    #[error("Matrix cannot be rearranged to be diagonally dominant")]
    NotDiagonallyDominant,

    /// Matrix and vector dimensions are incompatible.
    #[error("Incompatible dimensions: ({rows}x{cols}) matrix with length-{len} vector")]
    DimensionMismatch {
        /// Rows in the matrix.
        rows: usize,
        /// Columns in the matrix.
        cols: usize,
        /// Length of the vector.
        len: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a not-bracketed error for the given interval.
    #[must_use]
    pub fn not_bracketed(a: f64, b: f64) -> Self {
        Self::NotBracketed { a, b }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_bracketed_display() {
        let err = MathError::not_bracketed(-1.0, 1.0);
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("do not bound a root"));
    }

    #[test]
    fn test_invalid_tolerance_display() {
        let err = MathError::InvalidTolerance {
            tolerance: 2.0,
            width: 1.0,
        };
        assert!(err.to_string().contains("Invalid tolerance"));
    }
}
