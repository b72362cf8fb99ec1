//! Linear algebra utilities.
//!
//! This module provides the Gauss-Seidel iterative solver together with
//! the diagonal-dominance check and repair step it relies on for
//! guaranteed convergence.

use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};

/// Default convergence tolerance for Gauss-Seidel (infinity norm of the
/// change between sweeps).
pub const DEFAULT_TOLERANCE: f64 = 1e-16;

/// Default sweep limit for Gauss-Seidel.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Result of a Gauss-Seidel run.
#[derive(Debug, Clone)]
pub struct GaussSeidelSolution {
    /// The final iterate.
    pub solution: DVector<f64>,
    /// Number of sweeps performed.
    pub iterations: u32,
    /// Whether the infinity-norm convergence test was met before the
    /// sweep limit.
    pub converged: bool,
    /// The iterate after each sweep, in order.
    pub history: Vec<DVector<f64>>,
}

/// Checks whether each row's diagonal entry dominates the sum of the
/// magnitudes of the row's other entries.
pub fn is_diagonally_dominant(a: &DMatrix<f64>) -> bool {
    let n = a.nrows();
    (0..n).all(|i| {
        let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
        a[(i, i)].abs() >= off_diagonal
    })
}

/// Attempts to permute the rows of `a` (and `b` alongside) so that the
/// diagonal becomes dominant.
///
/// Each row is placed at the column index of its dominant entry. Returns
/// `None` when some row has no dominant entry or two rows compete for the
/// same position.
pub fn diagonal_dominance_fix(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Option<(DMatrix<f64>, DVector<f64>)> {
    let n = a.nrows();
    let mut source_row = vec![None; n];

    for row in 0..n {
        let mut dominant_col = None;
        for col in 0..n {
            let off_diagonal: f64 =
                (0..n).filter(|&j| j != col).map(|j| a[(row, j)].abs()).sum();
            if a[(row, col)].abs() >= off_diagonal {
                dominant_col = Some(col);
                break;
            }
        }

        let col = dominant_col?;
        if source_row[col].is_some() {
            return None;
        }
        source_row[col] = Some(row);
    }

    let mut fixed_a = DMatrix::zeros(n, n);
    let mut fixed_b = DVector::zeros(n);
    for (target, source) in source_row.iter().enumerate() {
        let source = source.expect("every position was assigned exactly once");
        fixed_a.row_mut(target).copy_from(&a.row(source));
        fixed_b[target] = b[source];
    }

    Some((fixed_a, fixed_b))
}

/// Solves `a * x = b` by Gauss-Seidel iteration.
///
/// When `a` is not diagonally dominant, the solver first tries to repair
/// it by row permutation via [`diagonal_dominance_fix`]. Sweeps update the
/// iterate in place, so each component uses the freshest values available.
/// Convergence is declared when the infinity norm of the change from the
/// previous sweep drops below `tolerance`; `x0` seeds that comparison for
/// the first sweep. Hitting the sweep limit is not an error: the last
/// iterate is returned with `converged = false`.
///
/// # Errors
///
/// - [`MathError::DimensionMismatch`] when `a` is not square or `b`/`x0`
///   have the wrong length
/// - [`MathError::NotDiagonallyDominant`] when no row permutation makes
///   the diagonal dominant
/// - [`MathError::InvalidInput`] for a zero diagonal entry or a
///   non-positive tolerance
///
/// # Example
///
/// ```rust
/// use iterion_math::linear_algebra::{gauss_seidel, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
/// use nalgebra::{DMatrix, DVector};
///
/// let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
/// let b = DVector::from_vec(vec![1.0, 2.0]);
/// let x0 = DVector::zeros(2);
///
/// let result = gauss_seidel(&a, &b, &x0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap();
/// assert!((result.solution[0] - 1.0 / 11.0).abs() < 1e-10);
/// ```
pub fn gauss_seidel(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    tolerance: f64,
    max_iterations: u32,
) -> MathResult<GaussSeidelSolution> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n {
        return Err(MathError::DimensionMismatch {
            rows: n,
            cols: a.ncols(),
            len: b.len(),
        });
    }
    if x0.len() != n {
        return Err(MathError::DimensionMismatch {
            rows: n,
            cols: n,
            len: x0.len(),
        });
    }
    if tolerance <= 0.0 {
        return Err(MathError::invalid_input("tolerance must be positive"));
    }

    let (a, b) = if is_diagonally_dominant(a) {
        log::debug!("matrix is diagonally dominant; no repair needed");
        (a.clone(), b.clone())
    } else {
        diagonal_dominance_fix(a, b).ok_or(MathError::NotDiagonallyDominant)?
    };

    if (0..n).any(|i| a[(i, i)] == 0.0) {
        return Err(MathError::invalid_input("matrix has a zero diagonal entry"));
    }

    let mut previous = x0.clone();
    let mut x = DVector::zeros(n);
    let mut history = Vec::new();

    for iteration in 1..=max_iterations {
        for i in 0..n {
            let mut sigma = 0.0;
            for j in 0..n {
                if j != i {
                    sigma += a[(i, j)] * x[j];
                }
            }
            x[i] = (b[i] - sigma) / a[(i, i)];
        }
        history.push(x.clone());

        if (&x - &previous).amax() < tolerance {
            return Ok(GaussSeidelSolution {
                solution: x,
                iterations: iteration,
                converged: true,
                history,
            });
        }
        previous.copy_from(&x);
    }

    log::warn!("Gauss-Seidel hit the sweep limit ({max_iterations}) before converging");
    Ok(GaussSeidelSolution {
        solution: x,
        iterations: max_iterations,
        converged: false,
        history,
    })
}
