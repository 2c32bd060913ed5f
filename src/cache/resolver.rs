//! Inverse Resolver Module
//!
//! Get-or-compute protocol around a `CachedMatrix` slot.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::cache::{CachedMatrix, ResolverStats};
use crate::error::Result;
use crate::matrix::{Inverter, LuInverter, Matrix};

// == Inverse Resolver ==
/// Returns the inverse of a `CachedMatrix`, computing it only on a miss.
///
/// The resolver holds no per-matrix state; one resolver can serve any number
/// of instances. Counters are atomic so `resolve` only needs `&self`.
#[derive(Debug)]
pub struct InverseResolver<I = LuInverter> {
    inverter: I,
    hits: AtomicU64,
    misses: AtomicU64,
    computations: AtomicU64,
    failures: AtomicU64,
    resets: AtomicU64,
}

impl Default for InverseResolver<LuInverter> {
    fn default() -> Self {
        Self::new(LuInverter::default())
    }
}

impl<I: Inverter> InverseResolver<I> {
    // == Constructor ==
    pub fn new(inverter: I) -> Self {
        Self {
            inverter,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            computations: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            resets: AtomicU64::new(0),
        }
    }

    /// The inversion primitive in use.
    pub fn inverter(&self) -> &I {
        &self.inverter
    }

    // == Resolve ==
    /// Returns the inverse of `matrix`.
    ///
    /// On a hit the slot is returned as is. On a miss the inversion primitive
    /// runs on the current value and its result is stored before returning.
    /// A primitive failure is returned unchanged and leaves the slot empty.
    pub fn resolve(&self, matrix: &mut CachedMatrix) -> Result<Matrix> {
        if let Some(inverse) = matrix.get_inverse() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("cache hit: returning cached inverse");
            return Ok(inverse.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = matrix.get();
        debug!(rows = value.rows(), cols = value.cols(), "cache miss: computing inverse");

        let inverse = match self.inverter.invert(value) {
            Ok(inverse) => inverse,
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!("inverse computation failed: {}", e);
                return Err(e.into());
            }
        };

        self.computations.fetch_add(1, Ordering::Relaxed);
        matrix.set_inverse(inverse.clone());
        Ok(inverse)
    }

    // == Reset ==
    /// Re-stores the current value so the next resolve recomputes.
    ///
    /// Same post-state as `matrix.set(matrix.get().clone())`.
    pub fn reset(&self, matrix: &mut CachedMatrix) {
        self.resets.fetch_add(1, Ordering::Relaxed);
        reset(matrix);
    }

    // == Stats ==
    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
        }
    }
}

/// Clears the inverse slot by storing the current value again.
pub fn reset(matrix: &mut CachedMatrix) {
    info!("cleaning cached inverse");
    let value = matrix.get().clone();
    matrix.set(value);
}

// == Test Support ==
/// Wraps an inverter and counts how many times it runs.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CountingInverter<I = LuInverter> {
    inner: I,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl<I> CountingInverter<I> {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl<I: Inverter> Inverter for CountingInverter<I> {
    fn invert(&self, matrix: &Matrix) -> std::result::Result<Matrix, crate::matrix::SolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.invert(matrix)
    }
}
