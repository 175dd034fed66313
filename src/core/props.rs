//! Layer 0: Dynamic property bags
//!
//! Component schemas evolve independently of this crate, so props are an
//! opaque ordered key/value map rather than a fixed struct. Slot fields
//! (arrays of child nodes) live inside props under keys the engine does not
//! know statically; see `walk` for how they are discovered.

use serde_json::Value;

/// Ordered property bag attached to a node or the document root.
pub type Props = serde_json::Map<String, Value>;

/// Look up a dotted path (e.g. `"address.city"`) inside a property bag.
///
/// Returns `None` on any missing segment or non-object intermediate.
pub fn get_path<'a>(props: &'a Props, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = props.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Props {
        let Value::Object(props) = json!({
            "name": "Cafe",
            "address": { "city": "Brooklyn", "line1": "123 Main St" },
            "hours": null,
        }) else {
            unreachable!()
        };
        props
    }

    #[test]
    fn top_level_lookup() {
        let props = sample();
        assert_eq!(get_path(&props, "name"), Some(&json!("Cafe")));
    }

    #[test]
    fn nested_lookup() {
        let props = sample();
        assert_eq!(get_path(&props, "address.city"), Some(&json!("Brooklyn")));
    }

    #[test]
    fn missing_segment_is_none() {
        let props = sample();
        assert_eq!(get_path(&props, "address.postalCode"), None);
        assert_eq!(get_path(&props, "geocode.lat"), None);
    }

    #[test]
    fn non_object_intermediate_is_none() {
        let props = sample();
        assert_eq!(get_path(&props, "name.first"), None);
        assert_eq!(get_path(&props, "hours.monday"), None);
    }
}
