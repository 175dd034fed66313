//! Tree traversal: find every node of a given type, at any depth.
//!
//! Slot fields are not statically known, so discovery is structural: any
//! array reachable through a node's props whose entries are node-shaped is
//! treated as a slot and recursed into, whatever its key is called. Root
//! props are not walked; they change only through a migration's root
//! transform.

use serde_json::Value;

use crate::core::{ContentTree, Node, Props};
use crate::migrate::TransformError;

/// Rewrite applied to each matched node. `None` deletes the node.
pub type Rewrite<'a> = dyn FnMut(Node) -> Result<Option<Node>, TransformError> + 'a;

/// Capability consumed by the migration engine: visit every node of
/// `type_name` across `content`, `zones`, and nested slots, replacing each
/// with the rewrite's output and preserving sibling order throughout.
pub trait TreeWalker {
    fn walk(
        &self,
        tree: ContentTree,
        type_name: &str,
        rewrite: &mut Rewrite<'_>,
    ) -> Result<ContentTree, TransformError>;
}

/// Default walker. Builds a new tree rather than mutating in place, so a
/// caller retaining the pre-migration tree never observes partial rewrites.
///
/// Children are visited before their containing node, one full pass per
/// call; the engine issues a fresh walk per migration step, which is what
/// makes nodes introduced by an earlier migration visible to later ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotWalker;

impl TreeWalker for SlotWalker {
    fn walk(
        &self,
        tree: ContentTree,
        type_name: &str,
        rewrite: &mut Rewrite<'_>,
    ) -> Result<ContentTree, TransformError> {
        let ContentTree {
            version,
            root_props,
            content,
            zones,
        } = tree;

        let content = walk_nodes(content, type_name, rewrite)?;
        let zones = zones
            .into_iter()
            .map(|(name, nodes)| Ok((name, walk_nodes(nodes, type_name, rewrite)?)))
            .collect::<Result<_, TransformError>>()?;

        Ok(ContentTree {
            version,
            root_props,
            content,
            zones,
        })
    }
}

fn walk_nodes(
    nodes: Vec<Node>,
    type_name: &str,
    rewrite: &mut Rewrite<'_>,
) -> Result<Vec<Node>, TransformError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(node) = walk_node(node, type_name, rewrite)? {
            out.push(node);
        }
    }
    Ok(out)
}

fn walk_node(
    mut node: Node,
    type_name: &str,
    rewrite: &mut Rewrite<'_>,
) -> Result<Option<Node>, TransformError> {
    node.props = walk_props(node.props, type_name, rewrite)?;
    if node.type_name == type_name {
        rewrite(node)
    } else {
        Ok(Some(node))
    }
}

fn walk_props(
    props: Props,
    type_name: &str,
    rewrite: &mut Rewrite<'_>,
) -> Result<Props, TransformError> {
    props
        .into_iter()
        .map(|(key, value)| Ok((key, walk_value(value, type_name, rewrite)?)))
        .collect()
}

fn walk_value(
    value: Value,
    type_name: &str,
    rewrite: &mut Rewrite<'_>,
) -> Result<Value, TransformError> {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                if Node::is_node_shaped(&item) {
                    let node: Node = serde_json::from_value(item)?;
                    if let Some(node) = walk_node(node, type_name, rewrite)? {
                        out.push(serde_json::to_value(node)?);
                    }
                } else {
                    out.push(walk_value(item, type_name, rewrite)?);
                }
            }
            Ok(Value::Array(out))
        }
        Value::Object(object) => Ok(Value::Object(walk_props(object, type_name, rewrite)?)),
        scalar => Ok(scalar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> ContentTree {
        ContentTree::from_value(value).expect("tree fixture")
    }

    fn collect_matches(tree: ContentTree, type_name: &str) -> Vec<Node> {
        let mut seen = Vec::new();
        SlotWalker
            .walk(tree, type_name, &mut |node| {
                seen.push(node.clone());
                Ok(Some(node))
            })
            .expect("walk");
        seen
    }

    #[test]
    fn finds_nodes_in_nested_slots_and_zones() {
        let tree = tree(json!({
            "content": [
                {
                    "type": "GridSection",
                    "props": {
                        "slots": {
                            "CardsSlot": [
                                {
                                    "type": "Card",
                                    "props": {
                                        "InnerSlot": [
                                            { "type": "Phone", "props": { "n": 1 } },
                                        ],
                                    },
                                },
                            ],
                        },
                    },
                },
                { "type": "Phone", "props": { "n": 2 } },
            ],
            "zones": {
                "footer": [ { "type": "Phone", "props": { "n": 3 } } ],
            },
        }));
        let seen = collect_matches(tree, "Phone");
        let mut ns: Vec<_> = seen
            .iter()
            .map(|node| node.props["n"].as_i64().unwrap())
            .collect();
        ns.sort_unstable();
        assert_eq!(ns, vec![1, 2, 3]);
    }

    #[test]
    fn non_node_arrays_pass_through_untouched() {
        let before = tree(json!({
            "content": [
                {
                    "type": "HoursTable",
                    "props": {
                        "days": ["mon", "tue"],
                        "rows": [ { "label": "Mon", "open": true } ],
                    },
                },
            ],
        }));
        let after = SlotWalker
            .walk(before.clone(), "Phone", &mut |node| Ok(Some(node)))
            .expect("walk");
        assert_eq!(after, before);
    }

    #[test]
    fn removal_preserves_sibling_order() {
        let before = tree(json!({
            "content": [
                { "type": "A", "props": { "n": 1 } },
                { "type": "B", "props": { "n": 2 } },
                { "type": "A", "props": { "n": 3 } },
                { "type": "C", "props": { "n": 4 } },
            ],
        }));
        let after = SlotWalker
            .walk(before, "A", &mut |_| Ok(None))
            .expect("walk");
        let types: Vec<_> = after
            .content
            .iter()
            .map(|node| node.type_name.as_str())
            .collect();
        assert_eq!(types, vec!["B", "C"]);
        assert_eq!(after.content[0].props["n"], json!(2));
        assert_eq!(after.content[1].props["n"], json!(4));
    }

    #[test]
    fn rewrite_error_propagates() {
        let before = tree(json!({
            "content": [ { "type": "A", "props": {} } ],
        }));
        let result = SlotWalker.walk(before, "A", &mut |_| {
            Err(TransformError::shape("boom"))
        });
        assert!(result.is_err());
    }

    #[test]
    fn children_are_visited_before_their_parent() {
        let before = tree(json!({
            "content": [
                {
                    "type": "Section",
                    "props": {
                        "ItemsSlot": [ { "type": "Section", "props": { "depth": 1 } } ],
                    },
                },
            ],
        }));
        let mut order = Vec::new();
        SlotWalker
            .walk(before, "Section", &mut |node| {
                order.push(node.props.contains_key("depth"));
                Ok(Some(node))
            })
            .expect("walk");
        assert_eq!(order, vec![true, false]);
    }
}
