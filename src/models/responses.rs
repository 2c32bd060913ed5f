//! Response DTOs for the inverse cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{ResolverStats, SlotState};
use crate::matrix::Matrix;

/// Response body for reading the stored matrix (GET /matrix)
#[derive(Debug, Clone, Serialize)]
pub struct MatrixResponse {
    /// The stored matrix
    pub matrix: Matrix,
    /// Whether an inverse is cached for it
    pub slot: SlotState,
}

impl MatrixResponse {
    pub fn new(matrix: Matrix, slot: SlotState) -> Self {
        Self { matrix, slot }
    }
}

/// Response body for storing or resetting (POST/PUT /matrix, POST /reset)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// Slot state after the operation, always empty
    pub slot: SlotState,
}

impl StoreResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            slot: SlotState::Empty,
        }
    }
}

/// Response body for resolving (GET /inverse)
#[derive(Debug, Clone, Serialize)]
pub struct InverseResponse {
    /// The inverse of the stored matrix
    pub inverse: Matrix,
    /// True when served from the slot without recomputing
    pub cached: bool,
}

impl InverseResponse {
    pub fn new(inverse: Matrix, cached: bool) -> Self {
        Self { inverse, cached }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub computations: u64,
    pub failures: u64,
    pub resets: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<ResolverStats> for StatsResponse {
    fn from(stats: ResolverStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            computations: stats.computations,
            failures: stats.failures,
            resets: stats.resets,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
