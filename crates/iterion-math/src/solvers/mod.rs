//! Root-finding algorithms.
//!
//! This module provides the bracketing root-finder at the heart of the
//! library:
//!
//! - [`bisection`]: Interval halving over a sign change, with a fallback
//!   that searches the derivative when the function itself is not bracketed
//! - [`solve_root`]: The same solver driven by a symbolic [`Expr`], which
//!   supplies the derivative automatically
//!
//! The helpers [`is_root_bound`], [`update_interval`], and
//! [`calculate_max_steps`] are exposed individually; each is a small pure
//! function and they compose into the full solver.
//!
//! # Example
//!
//! ```rust
//! use iterion_math::solvers::{bisection, DEFAULT_TOLERANCE};
//!
//! // Find the root of x^2 - 4 in [1, 3]
//! let f = |x: f64| x * x - 4.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let solution = bisection(f, df, 1.0, 3.0, DEFAULT_TOLERANCE).unwrap();
//! assert!((solution.root - 2.0).abs() < 1e-5);
//! ```

mod bisection;

pub use bisection::{
    bisection, calculate_max_steps, is_root_bound, solve_root, update_interval,
};

use crate::expression::Expr;

/// Default tolerance for the root-finder: the maximum acceptable interval
/// width at termination.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// How far the original function may sit from zero at a derivative-mode
/// candidate before the candidate is rejected.
pub const DERIVATIVE_ROOT_TOLERANCE: f64 = 1e-4;

/// One completed bisection iteration, recorded after the interval update.
///
/// `a` and `b` are the updated bounds; `c` is the midpoint that produced
/// them. Function values are taken from whichever function is active for
/// the search (the original, or its derivative in fallback mode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// Zero-based iteration index.
    pub index: u32,
    /// Lower bound after the update.
    pub a: f64,
    /// Upper bound after the update.
    pub b: f64,
    /// Active function value at `a`.
    pub fa: f64,
    /// Active function value at `b`.
    pub fb: f64,
    /// Midpoint that was bisected this iteration.
    pub c: f64,
    /// Active function value at `c`.
    pub fc: f64,
}

/// Result of a bisection search.
#[derive(Debug, Clone)]
pub struct BisectionSolution {
    /// Best root estimate (the last midpoint computed).
    pub root: f64,
    /// Number of loop iterations performed.
    pub iterations: u32,
    /// Per-iteration history, in order.
    pub trace: Vec<IterationRecord>,
    /// True when the search ran against the derivative instead of the
    /// original function.
    pub used_derivative: bool,
}

/// Convenience wrapper pairing an [`Expr`] with its derivative, ready to
/// hand to the solver as a pair of closures.
#[derive(Debug, Clone)]
pub struct CompiledExpr {
    function: Expr,
    derivative: Expr,
}

impl CompiledExpr {
    /// Compiles an expression, differentiating it once up front.
    #[must_use]
    pub fn new(function: Expr) -> Self {
        let derivative = function.derivative();
        Self {
            function,
            derivative,
        }
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.function.evaluate(x)
    }

    /// Evaluates the derivative at `x`.
    #[must_use]
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        self.derivative.evaluate(x)
    }
}
