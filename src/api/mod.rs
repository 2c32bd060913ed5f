//! API Module
//!
//! HTTP handlers and routing for the inverse cache REST API.
//!
//! # Endpoints
//! - `POST /matrix` - Store a new matrix
//! - `GET /matrix` - Read the stored matrix and slot state
//! - `PUT /matrix` - Replace the stored matrix
//! - `GET /inverse` - Resolve the inverse
//! - `POST /reset` - Clear the cached inverse
//! - `GET /stats` - Resolver statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
