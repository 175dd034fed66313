//! Migration capability errors.
//!
//! A failing prop transformation aborts the whole pass: a partially-migrated
//! layout is worse than a clearly failed load, so nothing is recovered
//! locally and the caller decides whether to fall back or surface the error.

use thiserror::Error;

use crate::error::{Effect, Transience};

/// Raised by prop transformations when the incoming props cannot be the
/// output of the immediately-preceding schema version.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    #[error("unexpected props shape: {reason}")]
    Shape { reason: String },

    #[error("props encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransformError {
    pub fn shape(reason: impl Into<String>) -> Self {
        TransformError::Shape {
            reason: reason.into(),
        }
    }
}

/// Canonical error enum for the migration engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MigrateError {
    /// A prop transformation failed while applying the migration at
    /// `version`. The tree it was working on must be discarded.
    #[error("migration {version} failed for `{component}`: {source}")]
    Transform {
        component: String,
        version: u64,
        source: TransformError,
    },

    /// The document claims a version newer than the supplied registry.
    /// Usually means a layout written by a newer release is being loaded
    /// with a stale registry.
    #[error("document version {document} is ahead of registry version {registry}")]
    VersionAhead { document: u64, registry: u64 },
}

impl MigrateError {
    pub fn transience(&self) -> Transience {
        Transience::Permanent
    }

    pub fn effect(&self) -> Effect {
        // The engine is pure; a failed pass leaves the caller's inputs alone.
        Effect::None
    }
}
