//! API Handlers
//!
//! HTTP request handlers for each inverse cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use tracing::info;

use crate::cache::{CachedMatrix, InverseResolver, SlotState};
use crate::error::{MatrixError, Result};
use crate::matrix::LuInverter;
use crate::models::{
    HealthResponse, InverseResponse, MatrixRequest, MatrixResponse, StatsResponse, StoreResponse,
};

/// Application state shared across all handlers.
///
/// The cached matrix sits behind an `RwLock`; resolve holds the write guard
/// for the whole check-compute-store sequence.
#[derive(Clone)]
pub struct AppState {
    /// The single cached matrix, None until one is stored
    pub matrix: Arc<RwLock<Option<CachedMatrix>>>,
    /// Resolver shared by all requests
    pub resolver: Arc<InverseResolver<LuInverter>>,
}

impl AppState {
    /// Creates a new AppState with no stored matrix.
    pub fn new(resolver: InverseResolver<LuInverter>) -> Self {
        Self {
            matrix: Arc::new(RwLock::new(None)),
            resolver: Arc::new(resolver),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(InverseResolver::new(LuInverter::new(config.pivot_tolerance)))
    }
}

fn no_matrix() -> MatrixError {
    MatrixError::NotFound("no matrix has been stored".to_string())
}

/// Handler for POST /matrix
///
/// Constructs a new cached matrix, replacing any previous one.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(req): Json<MatrixRequest>,
) -> Result<Json<StoreResponse>> {
    let cached = CachedMatrix::new(req.into_matrix()?)?;
    info!(rows = cached.get().rows(), cols = cached.get().cols(), "matrix created");

    *state.matrix.write().await = Some(cached);

    Ok(Json(StoreResponse::new("Matrix created")))
}

/// Handler for GET /matrix
pub async fn get_matrix_handler(State(state): State<AppState>) -> Result<Json<MatrixResponse>> {
    let guard = state.matrix.read().await;
    let cached = guard.as_ref().ok_or_else(no_matrix)?;

    Ok(Json(MatrixResponse::new(cached.get().clone(), cached.state())))
}

/// Handler for PUT /matrix
///
/// Replaces the stored value, which always clears the cached inverse.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<MatrixRequest>,
) -> Result<Json<StoreResponse>> {
    let matrix = req.into_matrix()?;
    let mut guard = state.matrix.write().await;
    let cached = guard.as_mut().ok_or_else(no_matrix)?;
    cached.set(matrix);

    Ok(Json(StoreResponse::new("Matrix replaced")))
}

/// Handler for GET /inverse
///
/// Takes the write lock since a miss stores the computed inverse.
pub async fn inverse_handler(State(state): State<AppState>) -> Result<Json<InverseResponse>> {
    let mut guard = state.matrix.write().await;
    let cached = guard.as_mut().ok_or_else(no_matrix)?;

    let was_cached = cached.state() == SlotState::Populated;
    let inverse = state.resolver.resolve(cached)?;

    Ok(Json(InverseResponse::new(inverse, was_cached)))
}

/// Handler for POST /reset
pub async fn reset_handler(State(state): State<AppState>) -> Result<Json<StoreResponse>> {
    let mut guard = state.matrix.write().await;
    let cached = guard.as_mut().ok_or_else(no_matrix)?;
    state.resolver.reset(cached);

    Ok(Json(StoreResponse::new("Cached inverse cleared")))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.resolver.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
