//! The migration pass itself.

use serde_json::Value;
use tracing::debug;

use crate::context::StreamDocument;
use crate::core::ContentTree;
use crate::walk::TreeWalker;

use super::action::MigrationAction;
use super::error::{MigrateError, TransformError};
use super::registry::{Migration, MigrationRegistry};

/// Bring a layout up to the registry's current schema version.
///
/// Pending migrations are applied strictly in registry order, each seeing the
/// cumulative result of all prior ones: first the root transform (handed an
/// empty map when no root props exist), then one tree walk per component
/// type in the migration's node map. A type with no matching nodes is a
/// silent no-op. Any transform failure aborts the pass and the partially
/// migrated tree is dropped with it.
///
/// The returned tree's version always equals `registry.current_version()`,
/// which is what makes a second pass over the same registry a no-op.
pub fn migrate(
    mut tree: ContentTree,
    registry: &MigrationRegistry,
    walker: &dyn TreeWalker,
    document: &StreamDocument,
) -> Result<ContentTree, MigrateError> {
    let start = tree.version;
    let target = registry.current_version();
    if start > target {
        return Err(MigrateError::VersionAhead {
            document: start,
            registry: target,
        });
    }

    for (offset, migration) in registry.pending(start).iter().enumerate() {
        let version = start + offset as u64;
        tree = apply_migration(tree, migration, walker, document, version)?;
        debug!(version, "applied layout migration");
    }

    tree.version = target;
    Ok(tree)
}

/// Raw-JSON entry point: decode (normalizing legacy document shapes),
/// migrate, re-encode. Callers are expected to persist the result so future
/// loads start from the new version.
pub fn migrate_value(
    value: Value,
    registry: &MigrationRegistry,
    walker: &dyn TreeWalker,
    document: &StreamDocument,
) -> crate::Result<Value> {
    let tree = ContentTree::from_value(value)?;
    let tree = migrate(tree, registry, walker, document)?;
    Ok(tree.to_value())
}

fn apply_migration(
    mut tree: ContentTree,
    migration: &Migration,
    walker: &dyn TreeWalker,
    document: &StreamDocument,
    version: u64,
) -> Result<ContentTree, MigrateError> {
    let fail = |component: &str| {
        let component = component.to_string();
        move |source: TransformError| MigrateError::Transform {
            component,
            version,
            source,
        }
    };

    if let Some(transform) = migration.root_transform() {
        let props = std::mem::take(&mut tree.root_props);
        tree.root_props = transform(props, document).map_err(fail("root"))?;
    }

    for (type_name, action) in migration.node_actions() {
        tree = apply_action(tree, type_name, action, walker, document).map_err(fail(type_name))?;
    }

    Ok(tree)
}

fn apply_action(
    tree: ContentTree,
    type_name: &str,
    action: MigrationAction,
    walker: &dyn TreeWalker,
    document: &StreamDocument,
) -> Result<ContentTree, TransformError> {
    match action {
        MigrationAction::Removed => walker.walk(tree, type_name, &mut |_| Ok(None)),
        MigrationAction::Renamed { new_type } => walker.walk(tree, type_name, &mut |mut node| {
            node.type_name = new_type.to_string();
            Ok(Some(node))
        }),
        MigrationAction::Updated { transform } => walker.walk(tree, type_name, &mut |mut node| {
            node.props = transform(std::mem::take(&mut node.props), document)?;
            Ok(Some(node))
        }),
    }
}
