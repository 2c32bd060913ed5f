//! Configuration Module
//!
//! Handles loading server and solver configuration from environment variables.

use std::env;

use crate::matrix::DEFAULT_PIVOT_TOLERANCE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Pivot magnitude at or below which a matrix is treated as singular
    pub pivot_tolerance: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PIVOT_TOLERANCE` - Singularity threshold (default: 1e-12)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            pivot_tolerance: env::var("PIVOT_TOLERANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|t: &f64| t.is_finite() && *t >= 0.0)
                .unwrap_or(DEFAULT_PIVOT_TOLERANCE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}
