use log::error;
use serde::Serialize;
use yew::prelude::*;

use crate::seo::structured_data::to_json_ld;

#[derive(Properties, PartialEq)]
pub struct JsonLdProps {
    /// Pre-serialized payload, see [`json_ld_payload`].
    pub payload: AttrValue,
}

/// Serializes `record` once so the component can compare props cheaply.
/// Returns `None` and logs when serialization fails.
pub fn json_ld_payload<T: Serialize>(record: &T) -> Option<AttrValue> {
    match to_json_ld(record) {
        Ok(json) => Some(AttrValue::from(json)),
        Err(e) => {
            error!("Failed to serialize structured data: {}", e);
            None
        }
    }
}

#[function_component(JsonLd)]
pub fn json_ld(props: &JsonLdProps) -> Html {
    html! {
        <script type="application/ld+json">{props.payload.clone()}</script>
    }
}

/// Renders `record` as a JSON-LD block, or nothing if it cannot be serialized.
pub fn structured_data<T: Serialize>(record: &T) -> Html {
    match json_ld_payload(record) {
        Some(payload) => html! { <JsonLd {payload} /> },
        None => html! {},
    }
}
