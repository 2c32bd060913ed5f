//! Request DTOs for the inverse cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::Result;
use crate::matrix::Matrix;

/// Request body for storing a matrix (POST /matrix, PUT /matrix)
///
/// Rows are kept raw so shape errors surface from the handler as
/// `InvalidArgument` rather than as an extractor rejection.
///
/// # Fields
/// - `matrix`: rows of the matrix, e.g. `[[2.0, 0.0], [0.0, 2.0]]`
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRequest {
    /// Rows of the matrix to store
    pub matrix: Vec<Vec<f64>>,
}

impl MatrixRequest {
    /// Validates the rows and builds the matrix.
    pub fn into_matrix(self) -> Result<Matrix> {
        Matrix::from_rows(self.matrix)
    }
}
