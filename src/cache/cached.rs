//! Cached Matrix Module
//!
//! A matrix value paired with a single slot for its inverse.

use serde::Serialize;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

// == Slot State ==
/// Whether the inverse slot currently holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Empty,
    Populated,
}

// == Cached Matrix ==
/// A matrix together with its lazily computed inverse.
///
/// Replacing the value always clears the inverse slot, so a stored inverse
/// only ever belongs to the matrix currently held.
#[derive(Debug, Clone)]
pub struct CachedMatrix {
    /// The stored matrix
    value: Matrix,
    /// Inverse of `value`, None until resolved
    inverse: Option<Matrix>,
}

impl CachedMatrix {
    // == Constructor ==
    /// Creates a new CachedMatrix holding `initial` with an empty slot.
    ///
    /// Fails with `InvalidArgument` when `initial` has no elements. Shape and
    /// invertibility are not checked here.
    pub fn new(initial: Matrix) -> Result<Self> {
        if initial.is_empty() {
            return Err(MatrixError::InvalidArgument(
                "cannot cache an empty matrix".to_string(),
            ));
        }

        Ok(Self {
            value: initial,
            inverse: None,
        })
    }

    // == Get ==
    /// Returns the stored matrix.
    pub fn get(&self) -> &Matrix {
        &self.value
    }

    // == Set ==
    /// Replaces the stored matrix and clears the inverse slot.
    ///
    /// No equality check is made: storing the same value still invalidates.
    pub fn set(&mut self, value: Matrix) {
        self.value = value;
        self.inverse = None;
    }

    // == Get Inverse ==
    /// Returns the cached inverse, if any.
    pub fn get_inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    // == Set Inverse ==
    /// Overwrites the inverse slot without checking it against the value.
    pub fn set_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    // == State ==
    pub fn state(&self) -> SlotState {
        if self.inverse.is_some() {
            SlotState::Populated
        } else {
            SlotState::Empty
        }
    }
}
