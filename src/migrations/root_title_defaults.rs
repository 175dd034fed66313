//! Root-level entity fields gained a required `constantValue`. Layouts saved
//! earlier carry only the field pointer; they get an empty constant so the
//! editor's constant-value toggle has something to show.

use serde_json::json;

use crate::context::StreamDocument;
use crate::core::Props;
use crate::migrate::{Migration, TransformError};

pub(super) fn migration() -> Migration {
    Migration::new().root(fill_constant_values)
}

fn fill_constant_values(
    mut props: Props,
    _document: &StreamDocument,
) -> Result<Props, TransformError> {
    for value in props.values_mut() {
        if let Some(object) = value.as_object_mut()
            && object.contains_key("field")
            && !object.contains_key("constantValue")
        {
            object.insert("constantValue".into(), json!(""));
        }
    }
    Ok(props)
}
