//! Bisection root-finding with a derivative-root fallback.
//!
//! The solver halves a bracketing interval until it is narrower than the
//! requested tolerance, with the iteration count bounded analytically by
//! [`calculate_max_steps`]. When the interval does not bracket a sign
//! change of the function, the solver searches for a root of the
//! derivative instead (an extremum of the original) and only accepts the
//! candidate if the original function is close enough to zero there.

use crate::error::{MathError, MathResult};
use crate::expression::Expr;
use crate::solvers::{
    BisectionSolution, CompiledExpr, IterationRecord, DERIVATIVE_ROOT_TOLERANCE,
};

/// Sign of a value, with zero as its own class.
///
/// Unlike `f64::signum`, which maps `0.0` to `1.0`, this treats an exact
/// zero as distinct from both positive and negative. NaN passes through
/// unchanged, so it compares unequal to every sign including itself.
fn sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value.is_nan() {
        f64::NAN
    } else {
        value.signum()
    }
}

/// Checks whether `[a, b]` brackets a sign change of `f`.
///
/// A zero endpoint counts as a sign change against any nonzero endpoint,
/// since `sign(0)` is its own class.
///
/// # Example
///
/// ```rust
/// use iterion_math::solvers::is_root_bound;
///
/// let f = |x: f64| x * x - 4.0;
/// assert!(is_root_bound(f, 1.0, 3.0));
/// assert!(!is_root_bound(f, 3.0, 5.0));
/// ```
pub fn is_root_bound<F>(f: F, a: f64, b: f64) -> bool
where
    F: Fn(f64) -> f64,
{
    sign(f(a)) != sign(f(b))
}

/// Halves `[a, b]` and returns the half that still brackets the root.
///
/// The test is strict: `f(m) * f(a) < 0.0` selects the left half `(a, m)`;
/// a zero product (root exactly at `a` or at the midpoint) selects the
/// right half `(m, b)`.
pub fn update_interval<F>(f: F, a: f64, b: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let mid = a + (b - a) / 2.0;
    if f(mid) * f(a) < 0.0 {
        (a, mid)
    } else {
        (mid, b)
    }
}

/// Number of interval halvings budgeted to shrink `b - a` below
/// `tolerance`, computed as `floor(log2((b - a) / tolerance)) - 1` and
/// clamped at zero.
///
/// # Errors
///
/// Fails with [`MathError::InvalidInput`] when `b <= a` and with
/// [`MathError::InvalidTolerance`] when the tolerance is non-positive or
/// at least as wide as the interval, where the formula would produce a
/// meaningless bound.
pub fn calculate_max_steps(a: f64, b: f64, tolerance: f64) -> MathResult<u32> {
    let width = b - a;
    if width.is_nan() || width <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "interval [{a}, {b}] must satisfy a < b"
        )));
    }
    if tolerance <= 0.0 || tolerance >= width {
        return Err(MathError::InvalidTolerance { tolerance, width });
    }

    let steps = ((width / tolerance).log2() - 1.0).floor();
    Ok(if steps > 0.0 { steps as u32 } else { 0 })
}

/// Finds a root of `f` in `[a, b]` by bisection, falling back to the
/// derivative `df` when `f` has no sign change over the interval.
///
/// In fallback mode the search runs against `df`, and the candidate is
/// accepted only if `|f(candidate)|` is within
/// [`DERIVATIVE_ROOT_TOLERANCE`](crate::solvers::DERIVATIVE_ROOT_TOLERANCE);
/// otherwise the extremum does not correspond to a root and the call fails.
///
/// # Errors
///
/// - [`MathError::InvalidTolerance`] / [`MathError::InvalidInput`] for
///   malformed inputs (checked before anything else)
/// - [`MathError::NotBracketed`] when neither `f` nor `df` changes sign
///   over `[a, b]`, or when a fallback candidate fails validation
///
/// # Example
///
/// ```rust
/// use iterion_math::solvers::{bisection, DEFAULT_TOLERANCE};
///
/// // (x - 1)^2 never crosses zero, but its derivative does at x = 1,
/// // and f(1) = 0, so the fallback accepts it.
/// let f = |x: f64| (x - 1.0) * (x - 1.0);
/// let df = |x: f64| 2.0 * (x - 1.0);
///
/// let solution = bisection(f, df, 0.0, 2.0, DEFAULT_TOLERANCE).unwrap();
/// assert!(solution.used_derivative);
/// assert!((solution.root - 1.0).abs() < 1e-5);
/// ```
pub fn bisection<F, D>(
    f: F,
    df: D,
    a: f64,
    b: f64,
    tolerance: f64,
) -> MathResult<BisectionSolution>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let (a0, b0) = (a, b);
    let max_iterations = calculate_max_steps(a, b, tolerance)?;

    let used_derivative = if is_root_bound(&f, a, b) {
        false
    } else if is_root_bound(&df, a, b) {
        log::debug!("no sign change of f over [{a}, {b}]; searching the derivative instead");
        true
    } else {
        return Err(MathError::not_bracketed(a, b));
    };

    let active = |x: f64| if used_derivative { df(x) } else { f(x) };

    let mut a = a;
    let mut b = b;
    let mut mid = a + (b - a) / 2.0;
    let mut iteration = 0;
    let mut trace = Vec::with_capacity(max_iterations as usize);

    while (b - a).abs() > tolerance && iteration < max_iterations {
        mid = a + (b - a) / 2.0;

        if active(mid) == 0.0 {
            // Exact hit: return without recording this iteration. A
            // fallback candidate still has to correspond to a root of the
            // original function.
            if used_derivative && f(mid).abs() > DERIVATIVE_ROOT_TOLERANCE {
                return Err(MathError::not_bracketed(a0, b0));
            }
            return Ok(BisectionSolution {
                root: mid,
                iterations: iteration,
                trace,
                used_derivative,
            });
        }

        let (next_a, next_b) = update_interval(&active, a, b);
        a = next_a;
        b = next_b;

        // Recorded after the update: the bounds are the new half-interval,
        // the midpoint is the one that produced it.
        trace.push(IterationRecord {
            index: iteration,
            a,
            b,
            fa: active(a),
            fb: active(b),
            c: mid,
            fc: active(mid),
        });
        iteration += 1;
    }

    if used_derivative && f(mid).abs() > DERIVATIVE_ROOT_TOLERANCE {
        return Err(MathError::not_bracketed(a0, b0));
    }

    Ok(BisectionSolution {
        root: mid,
        iterations: iteration,
        trace,
        used_derivative,
    })
}

/// Finds a root of a symbolic expression in `[a, b]`.
///
/// Differentiates `expr` once and runs [`bisection`] with the pair.
///
/// # Errors
///
/// Same failure modes as [`bisection`].
pub fn solve_root(expr: &Expr, a: f64, b: f64, tolerance: f64) -> MathResult<BisectionSolution> {
    let compiled = CompiledExpr::new(expr.clone());
    bisection(
        |x| compiled.evaluate(x),
        |x| compiled.evaluate_derivative(x),
        a,
        b,
        tolerance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::DEFAULT_TOLERANCE;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_is_root_bound_sign_change() {
        let f = |x: f64| x * x - 4.0;

        assert!(is_root_bound(f, 1.0, 3.0));
        assert!(!is_root_bound(f, 3.0, 5.0));
        assert!(!is_root_bound(f, -1.0, 1.0));
    }

    #[test]
    fn test_is_root_bound_zero_endpoint_counts_as_change() {
        // sign(0) is its own class, so a root sitting exactly on an
        // endpoint reports as bracketed.
        let f = |x: f64| x;

        assert!(is_root_bound(f, 0.0, 1.0));
        assert!(is_root_bound(f, -1.0, 0.0));
    }

    #[test]
    fn test_is_root_bound_both_endpoints_zero() {
        let f = |_: f64| 0.0;

        assert!(!is_root_bound(f, 0.0, 1.0));
    }

    #[test]
    fn test_update_interval_selects_left_half() {
        // Root of x - 1.25 in [1, 2]: midpoint 1.5 is past the root.
        let f = |x: f64| x - 1.25;

        assert_eq!(update_interval(f, 1.0, 2.0), (1.0, 1.5));
    }

    #[test]
    fn test_update_interval_selects_right_half() {
        let f = |x: f64| x - 1.75;

        assert_eq!(update_interval(f, 1.0, 2.0), (1.5, 2.0));
    }

    #[test]
    fn test_update_interval_zero_at_midpoint_goes_right() {
        // f is exactly zero at the midpoint: the zero product must route
        // to the right half, keeping the root on the new lower bound.
        let f = |x: f64| x - 1.0;

        assert_eq!(update_interval(f, 0.0, 2.0), (1.0, 2.0));
    }

    #[test]
    fn test_update_interval_zero_at_lower_bound_goes_right() {
        let f = |x: f64| x;

        assert_eq!(update_interval(f, 0.0, 1.0), (0.5, 1.0));
    }

    #[test]
    fn test_calculate_max_steps_formula() {
        // floor(log2(2 / 1e-6)) - 1 = 20 - 1
        assert_eq!(calculate_max_steps(1.0, 3.0, 1e-6).unwrap(), 19);
        // floor(log2(1 / 1e-6)) - 1 = 19 - 1
        assert_eq!(calculate_max_steps(0.0, 1.0, 1e-6).unwrap(), 18);
    }

    #[test]
    fn test_calculate_max_steps_clamps_at_zero() {
        // log2(1 / 0.3) - 1 is between 0 and 1
        assert_eq!(calculate_max_steps(0.0, 1.0, 0.3).unwrap(), 0);
    }

    #[test]
    fn test_calculate_max_steps_rejects_wide_tolerance() {
        let result = calculate_max_steps(0.0, 1.0, 1.0);
        assert!(matches!(result, Err(MathError::InvalidTolerance { .. })));

        let result = calculate_max_steps(0.0, 1.0, 2.5);
        assert!(matches!(result, Err(MathError::InvalidTolerance { .. })));
    }

    #[test]
    fn test_calculate_max_steps_rejects_nonpositive_tolerance() {
        let result = calculate_max_steps(0.0, 1.0, 0.0);
        assert!(matches!(result, Err(MathError::InvalidTolerance { .. })));

        let result = calculate_max_steps(0.0, 1.0, -1e-6);
        assert!(matches!(result, Err(MathError::InvalidTolerance { .. })));
    }

    #[test]
    fn test_calculate_max_steps_rejects_reversed_interval() {
        let result = calculate_max_steps(1.0, 0.0, 1e-6);
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_direct_mode_exact_midpoint_root() {
        // The very first midpoint of [1, 3] is 2, where x^2 - 4 is exactly
        // zero: the solver returns it without recording any iterations.
        let f = |x: f64| x * x - 4.0;
        let df = |x: f64| 2.0 * x;

        let solution = bisection(f, df, 1.0, 3.0, DEFAULT_TOLERANCE).unwrap();

        assert_eq!(solution.root, 2.0);
        assert_eq!(solution.iterations, 0);
        assert!(solution.trace.is_empty());
        assert!(!solution.used_derivative);
    }

    #[test]
    fn test_direct_mode_converges_to_sqrt2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let solution = bisection(f, df, 1.0, 2.0, DEFAULT_TOLERANCE).unwrap();
        let budget = calculate_max_steps(1.0, 2.0, DEFAULT_TOLERANCE).unwrap();

        // The budget formula exhausts the loop roughly two halvings short
        // of the width test, so the estimate lands within a few tolerances
        // of the true root.
        assert_eq!(solution.iterations, budget);
        assert_eq!(solution.trace.len() as u32, budget);
        assert_relative_eq!(solution.root, std::f64::consts::SQRT_2, epsilon = 1e-5);
        assert!(!solution.used_derivative);
    }

    #[test]
    fn test_trace_records_updated_interval() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let solution = bisection(f, df, 1.0, 2.0, DEFAULT_TOLERANCE).unwrap();

        // First midpoint is 1.5 where f > 0, so the root is in the left
        // half and the record holds the updated bounds (1, 1.5).
        let first = solution.trace[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.a, 1.0);
        assert_eq!(first.b, 1.5);
        assert_eq!(first.c, 1.5);
        assert_relative_eq!(first.fa, f(1.0));
        assert_relative_eq!(first.fb, f(1.5));
        assert_relative_eq!(first.fc, f(1.5));
    }

    #[test]
    fn test_no_bracket_anywhere_fails() {
        // x^2 + 1 has no real root; its derivative 2x does bracket zero,
        // but f(0) = 1 fails validation, so the call must error rather
        // than report x = 0 as a root.
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let result = bisection(f, df, -1.0, 1.0, DEFAULT_TOLERANCE);

        assert!(matches!(result, Err(MathError::NotBracketed { .. })));
    }

    #[test]
    fn test_flat_function_fails() {
        // Neither f nor its derivative changes sign.
        let f = |_: f64| 1.0;
        let df = |_: f64| 0.0;

        let result = bisection(f, df, 0.0, 1.0, DEFAULT_TOLERANCE);

        assert!(matches!(result, Err(MathError::NotBracketed { a, b }) if a == 0.0 && b == 1.0));
    }

    #[test]
    fn test_derivative_fallback_accepts_double_root() {
        // (x - 1)^2 touches zero at x = 1 without crossing; the fallback
        // finds the extremum and validation accepts it.
        let f = |x: f64| (x - 1.0) * (x - 1.0);
        let df = |x: f64| 2.0 * (x - 1.0);

        let solution = bisection(f, df, 0.0, 2.0, DEFAULT_TOLERANCE).unwrap();

        assert!(solution.used_derivative);
        assert_relative_eq!(solution.root, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_derivative_fallback_converges_to_offset_extremum() {
        // Extremum at x = 1.2, which no dyadic midpoint hits exactly, so
        // the fallback has to run the full halving loop before accepting.
        let f = |x: f64| (x - 1.2) * (x - 1.2);
        let df = |x: f64| 2.0 * (x - 1.2);

        let solution = bisection(f, df, 0.0, 2.0, DEFAULT_TOLERANCE).unwrap();

        assert!(solution.used_derivative);
        assert!(solution.iterations > 0);
        assert_relative_eq!(solution.root, 1.2, epsilon = 1e-4);
    }

    #[test]
    fn test_derivative_fallback_rejects_extremum_above_zero() {
        // Minimum of (x - 1.3)^2 + 1 is 1, well past the validation
        // threshold.
        let f = |x: f64| (x - 1.3) * (x - 1.3) + 1.0;
        let df = |x: f64| 2.0 * (x - 1.3);

        let result = bisection(f, df, 0.0, 2.0, DEFAULT_TOLERANCE);

        assert!(matches!(result, Err(MathError::NotBracketed { a, b }) if a == 0.0 && b == 2.0));
    }

    #[test]
    fn test_zero_budget_returns_initial_midpoint() {
        // Width 1 with tolerance 0.3 budgets zero halvings; the solver
        // returns the initial midpoint without iterating.
        let f = |x: f64| x - 0.05;
        let df = |_: f64| 1.0;

        let solution = bisection(f, df, -0.4, 0.6, 0.3).unwrap();

        assert_eq!(solution.iterations, 0);
        assert!(solution.trace.is_empty());
        assert_relative_eq!(solution.root, 0.1);
    }

    #[test]
    fn test_invalid_tolerance_fails_fast() {
        let f = |x: f64| x;
        let df = |_: f64| 1.0;

        let result = bisection(f, df, -1.0, 1.0, 5.0);

        assert!(matches!(result, Err(MathError::InvalidTolerance { .. })));
    }

    #[test]
    fn test_solve_root_with_expression() {
        let expr = Expr::x().powi(2) - Expr::num(4.0);

        let solution = solve_root(&expr, 1.0, 3.0, DEFAULT_TOLERANCE).unwrap();

        assert_eq!(solution.root, 2.0);
        assert!(!solution.used_derivative);
    }

    #[test]
    fn test_solve_root_expression_derivative_fallback() {
        let expr = (Expr::x() - Expr::num(1.0)).powi(2);

        let solution = solve_root(&expr, 0.0, 2.0, DEFAULT_TOLERANCE).unwrap();

        assert!(solution.used_derivative);
        assert_relative_eq!(solution.root, 1.0, epsilon = 1e-5);
    }

    proptest! {
        /// The estimate for a bracketed linear root lands within a few
        /// tolerances of the true root.
        #[test]
        fn prop_linear_root_converges(
            root in -100.0_f64..100.0,
            left_pad in 0.01_f64..50.0,
            right_pad in 0.01_f64..50.0,
        ) {
            let f = move |x: f64| x - root;
            let df = |_: f64| 1.0;
            let (a, b) = (root - left_pad, root + right_pad);

            let solution = bisection(f, df, a, b, DEFAULT_TOLERANCE).unwrap();

            prop_assert!((solution.root - root).abs() <= 8.0 * DEFAULT_TOLERANCE);
        }

        /// The loop never exceeds the analytic iteration budget.
        #[test]
        fn prop_iterations_within_budget(
            root in -10.0_f64..10.0,
            pad in 0.5_f64..20.0,
        ) {
            let f = move |x: f64| (x - root) * ((x - root) * (x - root) + 1.0);
            let df = move |x: f64| 3.0 * (x - root) * (x - root) + 1.0;
            let (a, b) = (root - pad, root + pad * 0.75);

            let budget = calculate_max_steps(a, b, DEFAULT_TOLERANCE).unwrap();
            let solution = bisection(f, df, a, b, DEFAULT_TOLERANCE).unwrap();

            prop_assert!(solution.iterations <= budget);
            prop_assert!(solution.trace.len() as u32 == solution.iterations);
        }

        /// Every midpoint lies strictly inside the interval active at its
        /// step, and each step keeps exactly one half of that interval.
        #[test]
        fn prop_trace_intervals_nest(
            root in -10.0_f64..10.0,
            pad in 0.5_f64..20.0,
        ) {
            let f = move |x: f64| x - root;
            let df = |_: f64| 1.0;
            let (a0, b0) = (root - pad, root + pad * 0.6);

            let solution = bisection(f, df, a0, b0, DEFAULT_TOLERANCE).unwrap();

            let (mut lo, mut hi) = (a0, b0);
            for record in &solution.trace {
                prop_assert!(lo < record.c && record.c < hi);
                let kept_left = record.a == lo && record.b == record.c;
                let kept_right = record.a == record.c && record.b == hi;
                prop_assert!(kept_left || kept_right);
                lo = record.a;
                hi = record.b;
            }
        }
    }
}
