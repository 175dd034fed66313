//! Core domain types for page layouts (Layers 0-2)
//!
//! Module hierarchy follows type dependency order:
//! - props: dynamic property bags (Layer 0)
//! - node: typed content nodes (Layer 1)
//! - tree: the document root (Layer 2)

pub mod error;
pub mod node;
pub mod props;
pub mod tree;

pub use error::{CoreError, InvalidTree};
pub use node::Node;
pub use props::Props;
pub use tree::ContentTree;
