//! Shipped layout migrations, one module per schema version bump.
//!
//! Order is the contract: the registry index of each migration is the
//! version it upgrades from, so entries are append-only, never reordered,
//! never edited after release. Evolving the schema means adding a module and
//! appending it to the list below.

mod cta_structures;
mod heading_text_defaults;
mod hero_slots;
mod root_title_defaults;
mod thin_banner;
mod translatable_text;

use std::sync::OnceLock;

use crate::migrate::MigrationRegistry;

/// Every migration shipped with this crate, in chronological order.
///
/// Initialized once and shared process-wide; its length is this release's
/// schema version.
pub fn builtin_registry() -> &'static MigrationRegistry {
    static REGISTRY: OnceLock<MigrationRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        MigrationRegistry::new(vec![
            cta_structures::migration(),        // 0 -> 1
            thin_banner::migration(),           // 1 -> 2
            hero_slots::migration(),            // 2 -> 3
            heading_text_defaults::migration(), // 3 -> 4
            root_title_defaults::migration(),   // 4 -> 5
            translatable_text::migration(),     // 5 -> 6
        ])
    })
}
