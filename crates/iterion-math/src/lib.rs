//! # Iterion Math
//!
//! Classroom numerical methods: a bracketing root-finder and an iterative
//! linear-system solver.
//!
//! This crate provides:
//!
//! - **Solvers**: Bisection root-finding with a derivative-root fallback
//!   for unbracketed intervals
//! - **Linear Algebra**: Gauss-Seidel iteration with a diagonal-dominance
//!   repair step
//! - **Expressions**: A small symbolic expression type with exact
//!   differentiation, for feeding the solver
//!
//! ## Design Philosophy
//!
//! - **Explicit outcomes**: A segment without a root is an `Err`, never a
//!   sentinel value
//! - **Traceable**: Every solver returns its full iteration history so
//!   callers can render or inspect it
//! - **Generic at the seam**: The root-finder takes plain `Fn(f64) -> f64`
//!   closures; symbolic expressions plug in on top

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod expression;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::expression::Expr;
    pub use crate::linear_algebra::{
        diagonal_dominance_fix, gauss_seidel, is_diagonally_dominant, GaussSeidelSolution,
    };
    pub use crate::solvers::{
        bisection, calculate_max_steps, is_root_bound, solve_root, update_interval,
        BisectionSolution, IterationRecord, DEFAULT_TOLERANCE,
    };
}

pub use error::{MathError, MathResult};
