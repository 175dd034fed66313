//! Heading slots gained explicit alignment. Older slots, including the ones
//! the hero split introduced one version earlier, default to left-aligned at
//! their existing level.

use serde_json::json;

use crate::context::StreamDocument;
use crate::core::Props;
use crate::migrate::{Migration, TransformError};

pub(super) fn migration() -> Migration {
    Migration::new().update("HeadingTextSlot", fill_heading_defaults)
}

fn fill_heading_defaults(
    mut props: Props,
    _document: &StreamDocument,
) -> Result<Props, TransformError> {
    let styles = props.entry("styles").or_insert_with(|| json!({}));
    let Some(styles) = styles.as_object_mut() else {
        return Err(TransformError::shape("heading styles must be an object"));
    };
    styles.entry("level").or_insert(json!(2));
    styles.entry("align").or_insert(json!("left"));
    Ok(props)
}
