//! Per-type migration actions.

use crate::context::StreamDocument;
use crate::core::Props;

use super::error::TransformError;

/// A pure props rewrite: old props in, new props out.
///
/// Plain `fn` pointers keep migrations `Sync + 'static`, so one registry can
/// serve concurrent `migrate` calls without synchronization. Authors must be
/// total over every props shape the preceding version could have produced;
/// old documents may lack fields that were optional at the time.
pub type PropTransform = fn(Props, &StreamDocument) -> Result<Props, TransformError>;

/// What one migration does to every node of a given component type.
///
/// Closed set on purpose: exhaustive matches in the engine mean a fourth
/// action kind cannot slip in without the compiler flagging every call site.
#[derive(Debug, Clone, Copy)]
pub enum MigrationAction {
    /// Matched nodes are deleted from whatever collection contains them.
    Removed,
    /// Matched nodes keep their props and id; only the type tag changes.
    Renamed { new_type: &'static str },
    /// Matched nodes have their props replaced by the transform's output.
    /// Type and id are untouched by the engine.
    Updated { transform: PropTransform },
}
