//! Core capability errors (parsing, validation).
//!
//! These are bounded and stable: core errors represent domain/refusal states,
//! not library implementation details.

use thiserror::Error;

use crate::error::{Effect, Transience};

/// Malformed layout document.
#[derive(Debug, Error, Clone)]
#[error("content tree is invalid: {reason}")]
pub struct InvalidTree {
    pub reason: String,
}

/// Canonical error enum for core capability.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error(transparent)]
    InvalidTree(#[from] InvalidTree),

    #[error("page set name is required to resolve a layout")]
    MissingPageSet,

    #[error("layout json decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn transience(&self) -> Transience {
        // Core errors are pure domain/input failures.
        Transience::Permanent
    }

    pub fn effect(&self) -> Effect {
        Effect::None
    }
}
