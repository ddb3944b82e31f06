use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// A fully translated backend request, built fresh for each call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Map<String, Value>,
}

impl PreparedRequest {
    pub fn new(url: String, headers: BTreeMap<String, String>, body: Map<String, Value>) -> Self {
        Self { url, headers, body }
    }
}

/// `Authorization: Bearer <key>` when a non-empty key is configured.
pub(crate) fn bearer_headers(api_key: Option<&str>) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if let Some(key) = api_key.filter(|key| !key.is_empty()) {
        headers.insert("Authorization".to_string(), format!("Bearer {key}"));
    }
    headers
}
