//! Wrap flat CTA objects in the nested `cta` structure that arrived with
//! typed CTAs. Hero and promo sections stored CTAs directly under their
//! struct entity field's constant value.

use serde_json::{Value, json};

use crate::context::StreamDocument;
use crate::core::Props;
use crate::migrate::{Migration, TransformError};

pub(super) fn migration() -> Migration {
    Migration::new()
        .update("HeroSection", wrap_hero_ctas)
        .update("PromoSection", wrap_promo_ctas)
}

fn wrap_hero_ctas(props: Props, _document: &StreamDocument) -> Result<Props, TransformError> {
    wrap_ctas(props, "hero")
}

fn wrap_promo_ctas(props: Props, _document: &StreamDocument) -> Result<Props, TransformError> {
    wrap_ctas(props, "promo")
}

fn wrap_ctas(mut props: Props, field: &str) -> Result<Props, TransformError> {
    let Some(constant_value) = props
        .get_mut("data")
        .and_then(Value::as_object_mut)
        .and_then(|data| data.get_mut(field))
        .and_then(Value::as_object_mut)
        .and_then(|entity_field| entity_field.get_mut("constantValue"))
        .and_then(Value::as_object_mut)
    else {
        return Ok(props);
    };

    for key in ["primaryCta", "secondaryCta"] {
        let Some(cta) = constant_value.get(key).and_then(Value::as_object) else {
            continue;
        };
        // Old structure: label/link directly on the CTA, no `cta` wrapper.
        if cta.contains_key("cta") || !cta.contains_key("label") {
            continue;
        }
        let mut wrapped = cta.clone();
        wrapped.insert("ctaType".into(), json!("textAndLink"));
        constant_value.insert(key.into(), json!({ "cta": wrapped }));
    }
    Ok(props)
}
