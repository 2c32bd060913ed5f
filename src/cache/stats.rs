//! Resolver Statistics Module
//!
//! Tracks how often the resolver served, computed, failed and reset.

use serde::Serialize;

// == Resolver Stats ==
/// Snapshot of resolver counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolverStats {
    /// Resolves answered from the slot
    pub hits: u64,
    /// Resolves that found the slot empty
    pub misses: u64,
    /// Successful runs of the inversion primitive
    pub computations: u64,
    /// Failed runs of the inversion primitive
    pub failures: u64,
    /// Explicit resets
    pub resets: u64,
}

impl ResolverStats {
    // == Constructor ==
    /// Creates a new ResolverStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was resolved.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
