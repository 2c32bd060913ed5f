//! Inverse Cache - memoized matrix inversion
//!
//! Holds a matrix next to a single slot for its inverse, computes the inverse
//! on first request and clears it whenever the matrix is replaced.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod matrix;
pub mod models;

pub use api::AppState;
pub use cache::{reset, CachedMatrix, InverseResolver, SlotState};
pub use config::Config;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
