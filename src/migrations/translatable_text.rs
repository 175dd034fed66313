//! Banner text became locale-keyed. Plain constant strings are wrapped into
//! a map keyed by the entity's locale so existing content keeps rendering in
//! the language it was authored in.

use serde_json::Value;

use crate::context::StreamDocument;
use crate::core::Props;
use crate::migrate::{Migration, TransformError};

pub(super) fn migration() -> Migration {
    Migration::new().update("ThinBannerSection", localize_banner_text)
}

fn localize_banner_text(
    mut props: Props,
    document: &StreamDocument,
) -> Result<Props, TransformError> {
    let Some(constant_value) = props
        .get_mut("text")
        .and_then(Value::as_object_mut)
        .and_then(|text| text.get_mut("constantValue"))
    else {
        return Ok(props);
    };
    if let Value::String(text) = constant_value {
        let mut localized = Props::new();
        localized.insert(document.locale().to_string(), Value::String(std::mem::take(text)));
        *constant_value = Value::Object(localized);
    }
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        serde_json::from_value(value).expect("props fixture")
    }

    #[test]
    fn wraps_plain_strings_using_entity_locale() {
        let document = StreamDocument::from_value(json!({ "locale": "es" })).unwrap();
        let out = localize_banner_text(
            props(json!({ "text": { "field": "", "constantValue": "Hola" } })),
            &document,
        )
        .expect("transform");
        assert_eq!(out["text"]["constantValue"], json!({ "es": "Hola" }));
    }

    #[test]
    fn defaults_to_en_without_entity_data() {
        let out = localize_banner_text(
            props(json!({ "text": { "constantValue": "Hello" } })),
            &StreamDocument::default(),
        )
        .expect("transform");
        assert_eq!(out["text"]["constantValue"], json!({ "en": "Hello" }));
    }

    #[test]
    fn locale_maps_pass_through() {
        let before = props(json!({ "text": { "constantValue": { "en": "Hello" } } }));
        let out = localize_banner_text(before.clone(), &StreamDocument::default())
            .expect("transform");
        assert_eq!(out, before);
    }
}
