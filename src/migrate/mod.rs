//! The schema-migration engine.
//!
//! A layout saved at schema version N is upgraded to the current version by
//! applying every registered migration from index N onward, in order. Each
//! migration maps component types to actions (remove, rename, transform) and
//! may additionally transform root props directly.

pub mod action;
pub mod engine;
pub mod error;
pub mod registry;

pub use action::{MigrationAction, PropTransform};
pub use engine::{migrate, migrate_value};
pub use error::{MigrateError, TransformError};
pub use registry::{Migration, MigrationRegistry};
