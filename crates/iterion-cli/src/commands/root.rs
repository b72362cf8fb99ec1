//! Root command implementation.
//!
//! Sweeps an interval in equal segments and runs the bisection solver on
//! each, reporting a root or the absence of one per segment.

use anyhow::Result;
use clap::Args;

use iterion_math::expression::Expr;
use iterion_math::solvers::solve_root;
use iterion_math::MathError;

use crate::commands::{validate_interval, validate_segments, validate_tolerance};
use crate::output::{print_info, print_success, print_trace};

/// Arguments for the root command.
#[derive(Args, Debug)]
pub struct RootArgs {
    /// Lower end of the sweep interval
    #[arg(short = 'a', long, default_value = "-2.0", allow_hyphen_values = true)]
    pub low: f64,

    /// Upper end of the sweep interval
    #[arg(short = 'b', long, default_value = "2.0", allow_hyphen_values = true)]
    pub high: f64,

    /// Maximum acceptable interval width at termination
    #[arg(short, long, default_value = "1e-6")]
    pub tolerance: f64,

    /// Number of equal sub-intervals to sweep
    #[arg(short, long, default_value = "10")]
    pub segments: u32,
}

/// The built-in demo polynomial: `6x^6 - 3x^5 - 2x^2 - 7`.
fn demo_polynomial() -> Expr {
    Expr::num(6.0) * Expr::x().powi(6)
        - Expr::num(3.0) * Expr::x().powi(5)
        - Expr::num(2.0) * Expr::x().powi(2)
        - Expr::num(7.0)
}

/// Execute the root command.
pub fn execute(args: RootArgs) -> Result<()> {
    let (low, high) = validate_interval(args.low, args.high)?;
    let tolerance = validate_tolerance(args.tolerance)?;
    let segments = validate_segments(args.segments)?;

    let expr = demo_polynomial();
    print_info(&format!(
        "The input function is f(x) = {expr} and the limits are {low} and {high}"
    ));

    let step = (high - low) / f64::from(segments);
    for segment in 0..segments {
        let a = low + step * f64::from(segment);
        let b = low + step * f64::from(segment + 1);

        match solve_root(&expr, a, b, tolerance) {
            Ok(solution) => {
                print_trace(&solution.trace);
                if solution.used_derivative {
                    print_info("root located through the derivative (extremum of f)");
                }
                print_success(&format!(
                    "The equation f(x) has an approximate root at x = {}",
                    solution.root
                ));
            }
            Err(MathError::NotBracketed { .. }) => {
                println!("No roots between ({a}) - ({b})\n");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
