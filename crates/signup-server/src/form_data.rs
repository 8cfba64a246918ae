// File: src/form_data.rs
// Purpose: Decode POST bodies (urlencoded or JSON) into field name/value pairs

use axum::http::HeaderMap;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Form data from a POST request.
///
/// Values are kept exactly as sent. Nothing is trimmed, since the submitted
/// values are echoed back verbatim.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a JSON object. `null` counts as an omitted key; other
    /// non-string values keep their JSON text.
    pub fn from_json(json: JsonValue) -> Self {
        let fields = match json {
            JsonValue::Object(map) => map
                .into_iter()
                .filter_map(|(key, value)| match value {
                    JsonValue::Null => None,
                    JsonValue::String(s) => Some((key, s)),
                    other => Some((key, other.to_string())),
                })
                .collect(),
            _ => HashMap::new(),
        };
        Self { fields }
    }

    /// Parse `application/x-www-form-urlencoded` text
    pub fn from_urlencoded(body: &str) -> Self {
        let fields = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .map(|(k, v)| (decode_component(k), decode_component(v)))
            .collect();
        Self { fields }
    }

    /// Decode a body according to its content type. Anything unrecognised,
    /// or malformed JSON, is an empty form.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Self {
        let content_type = headers
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default();

        if content_type.contains("application/json") {
            serde_json::from_slice::<JsonValue>(body)
                .map(Self::from_json)
                .unwrap_or_default()
        } else if content_type.contains("application/x-www-form-urlencoded") {
            Self::from_urlencoded(&String::from_utf8_lossy(body))
        } else {
            Self::new()
        }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }
}

// '+' means space in form encoding; percent-decoding alone leaves it as is
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
