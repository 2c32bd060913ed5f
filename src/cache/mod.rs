//! Cache Module
//!
//! Single-slot memoization of a matrix inverse.

mod cached;
mod resolver;
mod stats;


// Re-export public types
pub use cached::{CachedMatrix, SlotState};
pub use resolver::{reset, InverseResolver};
pub use stats::ResolverStats;

#[cfg(test)]
pub(crate) use resolver::CountingInverter;

// == Public Constants ==
/// Tolerance used when checking `M * M^-1` against the identity
pub const IDENTITY_TOLERANCE: f64 = 1e-9;
