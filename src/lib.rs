#![forbid(unsafe_code)]

pub mod context;
pub mod core;
pub mod error;
pub mod migrate;
pub mod migrations;
pub mod resolve;
pub mod walk;

pub use error::{Effect, Error, Transience};
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::context::StreamDocument;
pub use crate::core::{ContentTree, CoreError, InvalidTree, Node, Props};
pub use crate::migrate::{
    MigrateError, Migration, MigrationAction, MigrationRegistry, PropTransform, TransformError,
    migrate, migrate_value,
};
pub use crate::migrations::builtin_registry;
pub use crate::resolve::resolve_layout;
pub use crate::walk::{SlotWalker, TreeWalker};
