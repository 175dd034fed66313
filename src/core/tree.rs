//! Layer 2: The document root
//!
//! A `ContentTree` is what gets persisted per page layout: a schema version
//! counter, root-level props, the ordered top-level node list, and named
//! zones. The wire shape is:
//!
//! ```json
//! { "root": { "props": { "version": 3, ... } }, "content": [...], "zones": { ... } }
//! ```
//!
//! Decoding also accepts the legacy shape where root props sit directly
//! under `root` with no `props` wrapper; that normalization is the base-layer
//! pre-pass that must run before any migrations are selected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::error::{CoreError, InvalidTree};
use super::node::Node;
use super::props::Props;

/// A persisted page layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentTree {
    /// Number of migrations already applied. Absent on the wire means 0.
    pub version: u64,
    /// Root-level props, excluding the version counter.
    pub root_props: Props,
    /// Top-level nodes in rendering order.
    pub content: Vec<Node>,
    /// Named insertion points outside the main content list.
    pub zones: BTreeMap<String, Vec<Node>>,
}

impl ContentTree {
    /// The empty layout: no nodes, no zones, version 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a raw layout document, normalizing legacy shapes.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(mut document) = value else {
            return Err(invalid("layout document must be an object"));
        };

        let mut root_props = match document.shift_remove("root") {
            None | Some(Value::Null) => Props::new(),
            Some(Value::Object(mut root)) => match root.shift_remove("props") {
                Some(Value::Object(props)) => props,
                Some(Value::Null) | None => root, // legacy: props directly under root
                Some(_) => return Err(invalid("root.props must be an object")),
            },
            Some(_) => return Err(invalid("root must be an object")),
        };

        let version = match root_props.shift_remove("version") {
            None | Some(Value::Null) => 0,
            Some(value) => value
                .as_u64()
                .ok_or_else(|| invalid(format!("version must be a non-negative integer, got {value}")))?,
        };

        let content = match document.shift_remove("content") {
            None | Some(Value::Null) => Vec::new(),
            Some(value @ Value::Array(_)) => serde_json::from_value(value)
                .map_err(|e| invalid(format!("content: {e}")))?,
            Some(_) => return Err(invalid("content must be an array")),
        };

        let zones = match document.shift_remove("zones") {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(value @ Value::Object(_)) => serde_json::from_value(value)
                .map_err(|e| invalid(format!("zones: {e}")))?,
            Some(_) => return Err(invalid("zones must be an object")),
        };

        Ok(Self {
            version,
            root_props,
            content,
            zones,
        })
    }

    /// Encode back to the wire shape. `version` is always stamped into
    /// `root.props`, and `zones` is always present.
    pub fn to_value(&self) -> Value {
        let mut props = Props::new();
        props.insert("version".into(), json!(self.version));
        for (key, value) in &self.root_props {
            props.insert(key.clone(), value.clone());
        }
        json!({
            "root": { "props": props },
            "content": self.content,
            "zones": self.zones,
        })
    }
}

impl Serialize for ContentTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentTree {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn invalid(reason: impl Into<String>) -> CoreError {
    InvalidTree {
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip() {
        let raw = json!({
            "root": { "props": { "version": 2, "title": "Home" } },
            "content": [
                { "type": "HeroSection", "props": { "data": { "businessName": "Cafe" } } },
            ],
            "zones": {
                "sidebar": [ { "type": "HoursCard", "props": {} } ],
            },
        });
        let tree = ContentTree::from_value(raw.clone()).expect("decode");
        assert_eq!(tree.version, 2);
        assert_eq!(tree.root_props.get("title"), Some(&json!("Home")));
        assert_eq!(tree.content.len(), 1);
        assert_eq!(tree.zones["sidebar"].len(), 1);
        assert_eq!(tree.to_value(), raw);
    }

    #[test]
    fn missing_version_defaults_to_zero() {
        let tree = ContentTree::from_value(json!({
            "root": {},
            "content": [],
        }))
        .expect("decode");
        assert_eq!(tree.version, 0);
        assert!(tree.zones.is_empty());
    }

    #[test]
    fn legacy_root_props_are_hoisted() {
        let tree = ContentTree::from_value(json!({
            "root": { "version": 1, "title": "Legacy" },
            "content": [],
        }))
        .expect("decode");
        assert_eq!(tree.version, 1);
        assert_eq!(tree.root_props.get("title"), Some(&json!("Legacy")));
    }

    #[test]
    fn absent_root_is_empty() {
        let tree = ContentTree::from_value(json!({ "content": [] })).expect("decode");
        assert_eq!(tree.version, 0);
        assert!(tree.root_props.is_empty());
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(ContentTree::from_value(json!([])).is_err());
        assert!(ContentTree::from_value(json!({ "root": "x" })).is_err());
        assert!(ContentTree::from_value(json!({ "content": {} })).is_err());
        assert!(
            ContentTree::from_value(json!({ "root": { "props": { "version": -1 } } })).is_err()
        );
        assert!(ContentTree::from_value(json!({ "zones": [] })).is_err());
    }

    #[test]
    fn empty_layout_encodes_canonically() {
        assert_eq!(
            ContentTree::empty().to_value(),
            json!({ "root": { "props": { "version": 0 } }, "content": [], "zones": {} })
        );
    }
}
