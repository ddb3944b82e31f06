use super::types::{COHERE_BASE_URL, COHERE_TABLE, COHERE_VERSION, COMPLETION_TEXT_PATH};
use crate::provider::LLMProvider;
use crate::response::extract_text;
use crate::types::request::bearer_headers;
use crate::{EffectiveParams, Error, Overrides, ParamTable, PreparedRequest, ProviderType};
use serde_json::Value;
use std::fmt;

/// Cohere generate provider.
#[derive(Clone)]
pub struct CohereProvider {
    api_key: Option<String>,
    base_url: String,
    params: EffectiveParams,
}

impl CohereProvider {
    pub fn new(api_key: Option<String>, overrides: Overrides) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, overrides, COHERE_BASE_URL.to_string())
    }

    pub fn new_with_base_url(
        api_key: Option<String>,
        overrides: Overrides,
        base_url: String,
    ) -> Result<Self, Error> {
        let params = EffectiveParams::connect(&COHERE_TABLE, &overrides)?;

        Ok(Self {
            api_key,
            base_url,
            params,
        })
    }
}

impl fmt::Debug for CohereProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CohereProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .finish()
    }
}

impl LLMProvider for CohereProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Cohere
    }

    fn param_table(&self) -> &'static ParamTable {
        &COHERE_TABLE
    }

    fn params(&self) -> &EffectiveParams {
        &self.params
    }

    fn build_request(&self, prompt: &str, overrides: &Overrides) -> Result<PreparedRequest, Error> {
        let resolved = self.params.resolve(overrides)?;

        let mut headers = bearer_headers(self.api_key.as_deref());
        headers.insert("Cohere-Version".to_string(), COHERE_VERSION.to_string());

        Ok(PreparedRequest::new(
            format!("{}/generate", self.base_url),
            headers,
            resolved.into_body(prompt),
        ))
    }

    fn extract_completion(&self, raw_response: &Value) -> Result<String, Error> {
        extract_text(COHERE_TABLE.provider, raw_response, &COMPLETION_TEXT_PATH)
    }
}
