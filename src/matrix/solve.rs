//! Inversion Primitive
//!
//! `faer` partial-pivot LU behind the `Inverter` trait, so the resolver can be
//! driven by any implementation.

use faer::prelude::SolverCore;
use faer::Mat;
use thiserror::Error;

use super::Matrix;

/// Default magnitude at or below which a pivot counts as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

// == Solve Error ==
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is singular (no usable pivot in column {column})")]
    Singular { column: usize },

    #[error("matrix contains a non-finite entry at ({row}, {col})")]
    NonFinite { row: usize, col: usize },
}

// == Inverter ==
/// Computes the multiplicative inverse of a square matrix.
pub trait Inverter: Send + Sync {
    fn invert(&self, matrix: &Matrix) -> Result<Matrix, SolveError>;
}

// == LU Inverter ==
/// Inverts through `faer`'s partial-pivot LU factorization.
///
/// A diagonal entry of `U` at or below `pivot_tolerance` in magnitude marks
/// the matrix as singular.
#[derive(Debug, Clone, Copy)]
pub struct LuInverter {
    pub pivot_tolerance: f64,
}

impl LuInverter {
    pub fn new(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }
}

impl Default for LuInverter {
    fn default() -> Self {
        Self::new(DEFAULT_PIVOT_TOLERANCE)
    }
}

impl Inverter for LuInverter {
    fn invert(&self, matrix: &Matrix) -> Result<Matrix, SolveError> {
        if !matrix.is_square() {
            return Err(SolveError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        if let Some((row, col)) = matrix.first_non_finite() {
            return Err(SolveError::NonFinite { row, col });
        }

        let n = matrix.rows();
        let a = Mat::<f64>::from_fn(n, n, |i, j| matrix[(i, j)]);
        let lu = a.partial_piv_lu();

        let u = lu.compute_u();
        if let Some(column) =
            (0..n).find(|&i| !u[(i, i)].is_finite() || u[(i, i)].abs() <= self.pivot_tolerance)
        {
            return Err(SolveError::Singular { column });
        }

        let inv = lu.inverse();
        let mut out = Matrix::identity(n);
        for i in 0..n {
            for j in 0..n {
                out[(i, j)] = inv[(i, j)];
            }
        }

        // Pivots can pass the tolerance check and still overflow on the way back
        if let Some((_, col)) = out.first_non_finite() {
            return Err(SolveError::Singular { column: col });
        }
        Ok(out)
    }
}

/// Inverts `matrix` with the default tolerance.
pub fn solve(matrix: &Matrix) -> Result<Matrix, SolveError> {
    LuInverter::default().invert(matrix)
}
