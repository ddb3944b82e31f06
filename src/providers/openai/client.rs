use super::types::{COMPLETION_TEXT_PATH, OPENAI_BASE_URL, OPENAI_TABLE};
use crate::provider::LLMProvider;
use crate::response::extract_text;
use crate::types::request::bearer_headers;
use crate::{EffectiveParams, Error, Overrides, ParamTable, PreparedRequest, ProviderType};
use serde_json::Value;
use std::fmt;

/// OpenAI completions provider.
#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: Option<String>,
    base_url: String,
    params: EffectiveParams,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: Option<String>, overrides: Overrides) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, overrides, OPENAI_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(
        api_key: Option<String>,
        overrides: Overrides,
        base_url: String,
    ) -> Result<Self, Error> {
        let params = EffectiveParams::connect(&OPENAI_TABLE, &overrides)?;

        Ok(Self {
            api_key,
            base_url,
            params,
        })
    }
}

impl fmt::Debug for OpenAIProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .finish()
    }
}

impl LLMProvider for OpenAIProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::OpenAI
    }

    fn param_table(&self) -> &'static ParamTable {
        &OPENAI_TABLE
    }

    fn params(&self) -> &EffectiveParams {
        &self.params
    }

    fn build_request(&self, prompt: &str, overrides: &Overrides) -> Result<PreparedRequest, Error> {
        let resolved = self.params.resolve(overrides)?;

        Ok(PreparedRequest::new(
            format!("{}/completions", self.base_url),
            bearer_headers(self.api_key.as_deref()),
            resolved.into_body(prompt),
        ))
    }

    fn extract_completion(&self, raw_response: &Value) -> Result<String, Error> {
        extract_text(OPENAI_TABLE.provider, raw_response, &COMPLETION_TEXT_PATH)
    }
}
