//! One version step, and the ordered history of all of them.

use std::collections::BTreeMap;

use super::action::{MigrationAction, PropTransform};

/// One schema version bump: per-type node actions plus an optional root-props
/// transform.
///
/// Root transforms are a separate field rather than a reserved key in the
/// node map, so a component literally named `root` stays unambiguous.
#[derive(Debug, Clone, Default)]
pub struct Migration {
    root: Option<PropTransform>,
    nodes: BTreeMap<&'static str, MigrationAction>,
}

impl Migration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete every node of `type_name`.
    pub fn remove(mut self, type_name: &'static str) -> Self {
        self.nodes.insert(type_name, MigrationAction::Removed);
        self
    }

    /// Retag every node of `type_name` as `new_type`, props untouched.
    pub fn rename(mut self, type_name: &'static str, new_type: &'static str) -> Self {
        self.nodes
            .insert(type_name, MigrationAction::Renamed { new_type });
        self
    }

    /// Rewrite the props of every node of `type_name`.
    pub fn update(mut self, type_name: &'static str, transform: PropTransform) -> Self {
        self.nodes
            .insert(type_name, MigrationAction::Updated { transform });
        self
    }

    /// Rewrite root-level props directly (not tree-walked).
    pub fn root(mut self, transform: PropTransform) -> Self {
        self.root = Some(transform);
        self
    }

    pub fn root_transform(&self) -> Option<PropTransform> {
        self.root
    }

    pub fn node_actions(&self) -> impl Iterator<Item = (&'static str, MigrationAction)> + '_ {
        self.nodes.iter().map(|(name, action)| (*name, *action))
    }
}

/// The append-only, ordered history of every migration ever authored.
///
/// Its length is the authoritative current schema version. There is no
/// insertion, deletion, or merge: evolving the registry means appending a new
/// `Migration` at the end. A constructed registry is never mutated, so
/// unsynchronized concurrent reads are safe.
#[derive(Debug, Clone, Default)]
pub struct MigrationRegistry {
    migrations: Vec<Migration>,
}

impl MigrationRegistry {
    pub fn new(migrations: Vec<Migration>) -> Self {
        Self { migrations }
    }

    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// The schema version this registry migrates documents up to.
    pub fn current_version(&self) -> u64 {
        self.migrations.len() as u64
    }

    pub fn get(&self, index: usize) -> Option<&Migration> {
        self.migrations.get(index)
    }

    /// Migrations not yet applied to a document at `from`. Empty when the
    /// document is already current (or claims to be newer).
    pub fn pending(&self, from: u64) -> &[Migration] {
        usize::try_from(from)
            .ok()
            .and_then(|from| self.migrations.get(from..))
            .unwrap_or(&[])
    }
}

impl FromIterator<Migration> for MigrationRegistry {
    fn from_iter<I: IntoIterator<Item = Migration>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
