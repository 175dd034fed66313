//! Layer 1: Typed content nodes
//!
//! A node is a component type tag plus an opaque property bag. The engine
//! never interprets props beyond slot discovery; component schemas live with
//! the components themselves.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::props::Props;

/// One entry in the content tree.
///
/// `id` is a stable identity across migrations: the engine preserves it on
/// rename and update and never invents or drops it. Fields the engine does
/// not model (editor metadata such as `readOnly`) round-trip through `rest`
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub props: Props,

    #[serde(flatten)]
    pub rest: Props,
}

impl Node {
    pub fn new(type_name: impl Into<String>, props: Props) -> Self {
        Self {
            type_name: type_name.into(),
            id: None,
            props,
            rest: Props::new(),
        }
    }

    /// Whether a raw JSON value looks like a node: an object carrying a
    /// string `type` and an object `props`. The tree walker uses this to
    /// discover slot arrays inside props.
    pub fn is_node_shaped(value: &Value) -> bool {
        let Some(object) = value.as_object() else {
            return false;
        };
        object.get("type").is_some_and(Value::is_string)
            && object.get("props").is_some_and(Value::is_object)
    }
}
