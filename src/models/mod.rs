//! Request and Response models for the inverse cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::MatrixRequest;
pub use responses::{HealthResponse, InverseResponse, MatrixResponse, StatsResponse, StoreResponse};
