//! Read-only entity context available to prop transformations.
//!
//! A migration may need entity data to compute version-appropriate defaults,
//! e.g. wrapping a plain string into a locale-keyed map using the entity's
//! configured locale. The engine never mutates this document; transforms only
//! read from it. Callers without entity data pass `StreamDocument::default()`.

use serde_json::Value;

use crate::core::props::{Props, get_path};

const DEFAULT_LOCALE: &str = "en";

/// The stream document backing the page being migrated.
#[derive(Debug, Clone, Default)]
pub struct StreamDocument {
    fields: Props,
}

impl StreamDocument {
    pub fn new(fields: Props) -> Self {
        Self { fields }
    }

    /// Build from a raw JSON value. `Null` is treated as an empty document;
    /// anything other than an object is rejected.
    pub fn from_value(value: Value) -> Result<Self, crate::core::CoreError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(crate::core::InvalidTree {
                reason: "stream document must be an object".into(),
            }
            .into()),
        }
    }

    pub fn fields(&self) -> &Props {
        &self.fields
    }

    /// Look up a dotted field path (e.g. `"address.city"`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_path(&self.fields, path)
    }

    /// The entity's locale: top-level `locale`, falling back to
    /// `meta.locale`, then `"en"`.
    pub fn locale(&self) -> &str {
        self.get("locale")
            .or_else(|| self.get("meta.locale"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LOCALE)
    }
}
