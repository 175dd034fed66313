//! Split the monolithic hero section: business name and geomodifier move out
//! of `data` into dedicated heading slots, so the editor can target each
//! heading as its own child node.

use serde_json::{Value, json};

use crate::context::StreamDocument;
use crate::core::Props;
use crate::migrate::{Migration, TransformError};

pub(super) fn migration() -> Migration {
    Migration::new().update("HeroSection", slotify_hero)
}

fn slotify_hero(mut props: Props, _document: &StreamDocument) -> Result<Props, TransformError> {
    let mut data = match props.shift_remove("data") {
        Some(Value::Object(data)) => data,
        None => Props::new(),
        Some(other) => {
            return Err(TransformError::shape(format!(
                "hero data must be an object, got {other}"
            )));
        }
    };

    let business_name = data
        .shift_remove("businessName")
        .unwrap_or_else(|| json!({ "field": "name", "constantValue": "" }));
    let geomodifier = data
        .shift_remove("localGeoModifier")
        .unwrap_or_else(|| json!({ "field": "address.city", "constantValue": "" }));

    let (business_level, geomodifier_level) = match props
        .get_mut("styles")
        .and_then(Value::as_object_mut)
    {
        Some(styles) => (
            styles.shift_remove("businessNameLevel").unwrap_or(json!(3)),
            styles
                .shift_remove("localGeoModifierLevel")
                .unwrap_or(json!(1)),
        ),
        None => (json!(3), json!(1)),
    };

    let id = props
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("HeroSection")
        .to_string();

    props.insert("data".into(), Value::Object(data));
    props.insert(
        "slots".into(),
        json!({
            "BusinessNameSlot": [
                heading_slot(format!("{id}-BusinessNameSlot"), business_name, business_level),
            ],
            "GeomodifierSlot": [
                heading_slot(format!("{id}-GeomodifierSlot"), geomodifier, geomodifier_level),
            ],
        }),
    );
    Ok(props)
}

fn heading_slot(id: String, text: Value, level: Value) -> Value {
    json!({
        "type": "HeadingTextSlot",
        "props": {
            "id": id,
            "data": { "text": text },
            "styles": { "level": level },
        },
    })
}
