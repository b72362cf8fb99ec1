//! Symbolic expressions in one variable.
//!
//! [`Expr`] is a small expression tree that can be evaluated at a point and
//! differentiated exactly. It exists to feed [`crate::solvers::solve_root`],
//! which needs both a function and its derivative; the solver itself only
//! sees plain closures.
//!
//! # Example
//!
//! ```rust
//! use iterion_math::expression::Expr;
//!
//! // f(x) = x^2 - 4
//! let f = Expr::x().powi(2) - Expr::num(4.0);
//!
//! assert_eq!(f.evaluate(3.0), 5.0);
//! assert_eq!(f.derivative().evaluate(3.0), 6.0); // f'(x) = 2x
//! ```

use std::fmt;
use std::ops;

/// A symbolic expression in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Num(f64),
    /// The variable `x`.
    X,
    /// Negation.
    Neg(Box<Expr>),
    /// Sum of two expressions.
    Add(Box<Expr>, Box<Expr>),
    /// Difference of two expressions.
    Sub(Box<Expr>, Box<Expr>),
    /// Product of two expressions.
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient of two expressions.
    Div(Box<Expr>, Box<Expr>),
    /// Integer power of an expression.
    Pow(Box<Expr>, i32),
}

impl Expr {
    /// The variable `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::X
    }

    /// A numeric constant.
    #[must_use]
    pub fn num(value: f64) -> Self {
        Self::Num(value)
    }

    /// Raises the expression to an integer power.
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        Self::Pow(Box::new(self), exponent)
    }

    /// Evaluates the expression at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Num(value) => *value,
            Self::X => x,
            Self::Neg(inner) => -inner.evaluate(x),
            Self::Add(lhs, rhs) => lhs.evaluate(x) + rhs.evaluate(x),
            Self::Sub(lhs, rhs) => lhs.evaluate(x) - rhs.evaluate(x),
            Self::Mul(lhs, rhs) => lhs.evaluate(x) * rhs.evaluate(x),
            Self::Div(lhs, rhs) => lhs.evaluate(x) / rhs.evaluate(x),
            Self::Pow(base, exponent) => base.evaluate(x).powi(*exponent),
        }
    }

    /// Returns the exact derivative of the expression.
    ///
    /// Applies the textbook sum, product, quotient, and power rules. The
    /// result is lightly constant-folded but not simplified beyond that.
    #[must_use]
    pub fn derivative(&self) -> Self {
        match self {
            Self::Num(_) => Self::Num(0.0),
            Self::X => Self::Num(1.0),
            Self::Neg(inner) => neg(inner.derivative()),
            Self::Add(lhs, rhs) => add(lhs.derivative(), rhs.derivative()),
            Self::Sub(lhs, rhs) => sub(lhs.derivative(), rhs.derivative()),
            Self::Mul(lhs, rhs) => add(
                mul(lhs.derivative(), (**rhs).clone()),
                mul((**lhs).clone(), rhs.derivative()),
            ),
            Self::Div(lhs, rhs) => div(
                sub(
                    mul(lhs.derivative(), (**rhs).clone()),
                    mul((**lhs).clone(), rhs.derivative()),
                ),
                Self::Pow(rhs.clone(), 2),
            ),
            // d/dx u^n = n * u^(n-1) * u'
            Self::Pow(base, exponent) => mul(
                mul(Self::Num(f64::from(*exponent)), pow((**base).clone(), exponent - 1)),
                base.derivative(),
            ),
        }
    }

    fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            _ => None,
        }
    }
}

// Folding constructors keep derivatives free of `0 * ...` and `... + 0`
// noise so printed expressions stay readable.

fn add(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(a), Some(b)) => Expr::Num(a + b),
        (Some(0.0), None) => rhs,
        (None, Some(0.0)) => lhs,
        _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
    }
}

fn sub(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(a), Some(b)) => Expr::Num(a - b),
        (None, Some(0.0)) => lhs,
        (Some(0.0), None) => neg(rhs),
        _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
    }
}

fn mul(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(a), Some(b)) => Expr::Num(a * b),
        (Some(0.0), None) | (None, Some(0.0)) => Expr::Num(0.0),
        (Some(1.0), None) => rhs,
        (None, Some(1.0)) => lhs,
        _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
    }
}

fn div(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(0.0), None) => Expr::Num(0.0),
        (None, Some(1.0)) => lhs,
        _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
    }
}

fn neg(inner: Expr) -> Expr {
    match inner {
        Expr::Num(value) => Expr::Num(-value),
        Expr::Neg(e) => *e,
        _ => Expr::Neg(Box::new(inner)),
    }
}

fn pow(base: Expr, exponent: i32) -> Expr {
    match exponent {
        0 => Expr::Num(1.0),
        1 => base,
        _ => Expr::Pow(Box::new(base), exponent),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{value}"),
            Self::X => write!(f, "x"),
            Self::Neg(inner) => write!(f, "-({inner})"),
            Self::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Self::Sub(lhs, rhs) => write!(f, "({lhs} - {rhs})"),
            Self::Mul(lhs, rhs) => write!(f, "{lhs}*{rhs}"),
            Self::Div(lhs, rhs) => write!(f, "({lhs}/{rhs})"),
            Self::Pow(base, exponent) => write!(f, "{base}^{exponent}"),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}
