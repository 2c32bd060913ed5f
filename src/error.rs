//! Error types for the inverse cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matrix::SolveError;

// == Matrix Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Rejected input matrix (empty or ragged)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The inversion primitive failed
    #[error("Computation failure: {0}")]
    Computation(#[from] SolveError),

    /// No matrix has been stored yet
    #[error("Not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for MatrixError {
    fn into_response(self) -> Response {
        let status = match &self {
            MatrixError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            MatrixError::Computation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MatrixError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;
