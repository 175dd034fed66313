//! Layout resolution: pick the stored layout payload for a page set.
//!
//! An entity document can carry several candidate layouts: configurations on
//! the entity itself, page layouts the entity references, and site-wide
//! default layouts. The first candidate matching the requested page set (and
//! site, when the document names one) wins. Missing or unparseable payloads
//! fall back to the empty layout rather than failing the page.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::context::StreamDocument;
use crate::core::{ContentTree, CoreError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfiguration {
    page_set: String,
    data: String,
    #[serde(default)]
    site_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutReference {
    #[serde(default)]
    visual_configuration: Option<LayoutConfiguration>,
}

/// Resolve the raw layout JSON for `page_set` from an entity document.
///
/// The result is ready to feed to [`crate::migrate_value`]; resolution never
/// migrates. `page_set` is required: a caller without one has a broken
/// template config and gets an error rather than a silently empty page.
pub fn resolve_layout(
    document: &StreamDocument,
    page_set: Option<&str>,
) -> Result<Value, CoreError> {
    let Some(page_set) = page_set.map(str::trim).filter(|s| !s.is_empty()) else {
        return Err(CoreError::MissingPageSet);
    };

    let site_id = document.get("siteId").and_then(Value::as_i64);

    let entity_configurations: Vec<LayoutConfiguration> =
        candidates(document, "visualConfigurations");
    let entity_layouts: Vec<LayoutReference> = candidates(document, "pageLayouts");
    let site_layouts: Vec<LayoutReference> = candidates(document, "_site.defaultLayouts");

    let configurations = entity_configurations.into_iter().chain(
        entity_layouts
            .into_iter()
            .chain(site_layouts)
            .filter_map(|reference| reference.visual_configuration),
    );

    for configuration in configurations {
        if configuration.page_set != page_set {
            continue;
        }
        // A document that names a site only accepts layouts scoped to it.
        if let Some(document_site) = site_id
            && configuration.site_id != Some(document_site)
        {
            continue;
        }
        return Ok(parse_or_default(&configuration.data, page_set));
    }

    warn!(page_set, "no layout found for page set, using empty layout");
    Ok(ContentTree::empty().to_value())
}

/// Decode a candidate list field, tolerating absent or malformed data.
fn candidates<T: for<'de> Deserialize<'de>>(document: &StreamDocument, path: &str) -> Vec<T> {
    let Some(value) = document.get(path) else {
        return Vec::new();
    };
    match serde_json::from_value(value.clone()) {
        Ok(list) => list,
        Err(error) => {
            warn!(path, %error, "skipping malformed layout candidates");
            Vec::new()
        }
    }
}

fn parse_or_default(data: &str, page_set: &str) -> Value {
    if data.is_empty() {
        warn!(page_set, "missing layout data, using empty layout");
        return ContentTree::empty().to_value();
    }
    match serde_json::from_str(data) {
        Ok(value) => value,
        Err(error) => {
            warn!(page_set, %error, "invalid layout data, using empty layout");
            ContentTree::empty().to_value()
        }
    }
}
