//! Matrix Module
//!
//! Dense row-major matrix value type and the inversion primitive.

mod solve;

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

pub use solve::{solve, Inverter, LuInverter, SolveError, DEFAULT_PIVOT_TOLERANCE};

// == Matrix ==
/// A dense row-major matrix of `f64`.
///
/// Serializes as a JSON array of rows. Deserialization goes through
/// [`Matrix::from_rows`], so ragged input is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>, // row * cols + col
    rows: usize,
    cols: usize,
}

impl Matrix {
    // == Constructors ==
    /// Builds a matrix from a list of rows.
    ///
    /// An empty list yields the 0x0 matrix. Rows of differing length are
    /// rejected with `InvalidArgument`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(MatrixError::InvalidArgument(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// The 0x0 matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self {
            data: vec![0.0; n * n],
            rows: n,
            cols: n,
        };
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    // == Shape ==
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the first NaN or infinite entry, in row-major order.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|i| (i / self.cols, i % self.cols))
    }

    // == Conversion ==
    /// Returns the matrix as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    // == Arithmetic ==
    /// Matrix product `self * other`, or `None` when the inner dimensions differ.
    pub fn multiply(&self, other: &Matrix) -> Option<Matrix> {
        if self.cols != other.rows {
            return None;
        }

        let mut out = Matrix {
            data: vec![0.0; self.rows * other.cols],
            rows: self.rows,
            cols: other.cols,
        };
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self[(i, k)];
                for j in 0..other.cols {
                    out[(i, j)] += a * other[(k, j)];
                }
            }
        }
        Some(out)
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        assert!(r < self.rows && c < self.cols, "matrix index out of bounds");
        r * self.cols + c
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[self.idx(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        let idx = self.idx(r, c);
        &mut self.data[idx]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
