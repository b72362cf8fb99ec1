//! Linear command implementation.
//!
//! Runs Gauss-Seidel iteration on the built-in demo system and prints the
//! sweep history.

use anyhow::Result;
use clap::Args;
use nalgebra::{DMatrix, DVector};

use iterion_math::linear_algebra::gauss_seidel;

use crate::commands::validate_tolerance;
use crate::output::{print_info, print_success, print_sweep_history, print_warning};

/// Arguments for the linear command.
#[derive(Args, Debug)]
pub struct LinearArgs {
    /// Convergence tolerance (infinity norm of the change between sweeps)
    #[arg(short, long, default_value = "1e-16")]
    pub tolerance: f64,

    /// Maximum number of sweeps
    #[arg(short, long, default_value = "200")]
    pub max_iterations: u32,
}

/// The built-in demo system.
fn demo_system() -> (DMatrix<f64>, DVector<f64>) {
    let a = DMatrix::from_row_slice(3, 3, &[3.0, 1.0, 1.0, 1.0, 1.0, 3.0, 1.0, 3.0, 1.0]);
    let b = DVector::from_vec(vec![7.0, 7.0, 11.0]);
    (a, b)
}

/// Execute the linear command.
pub fn execute(args: LinearArgs) -> Result<()> {
    let tolerance = validate_tolerance(args.tolerance)?;

    let (a, b) = demo_system();
    let x0 = DVector::zeros(b.len());

    print_info(&format!(
        "The input matrix is {a} and the input vector is {b}"
    ));

    let result = gauss_seidel(&a, &b, &x0, tolerance, args.max_iterations)?;

    print_sweep_history(&result.history);

    if !result.converged {
        print_warning("maximum number of iterations exceeded");
    }

    let solution: Vec<String> = result.solution.iter().map(|v| format!("{v:.10}")).collect();
    print_success(&format!(
        "Approximate solution: ({})",
        solution.join(", ")
    ));

    Ok(())
}
