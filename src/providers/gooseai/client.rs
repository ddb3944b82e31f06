use super::types::{COMPLETION_TEXT_PATH, GOOSEAI_BASE_URL, GOOSEAI_TABLE};
use crate::provider::LLMProvider;
use crate::response::extract_text;
use crate::types::request::bearer_headers;
use crate::{EffectiveParams, Error, Overrides, ParamTable, PreparedRequest, ProviderType};
use serde_json::Value;
use std::fmt;

/// GooseAI provider. The model is addressed as an engine in the endpoint path.
#[derive(Clone)]
pub struct GooseAIProvider {
    api_key: Option<String>,
    base_url: String,
    params: EffectiveParams,
}

impl GooseAIProvider {
    pub fn new(api_key: Option<String>, overrides: Overrides) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, overrides, GOOSEAI_BASE_URL.to_string())
    }

    pub fn new_with_base_url(
        api_key: Option<String>,
        overrides: Overrides,
        base_url: String,
    ) -> Result<Self, Error> {
        let params = EffectiveParams::connect(&GOOSEAI_TABLE, &overrides)?;

        Ok(Self {
            api_key,
            base_url,
            params,
        })
    }
}

impl fmt::Debug for GooseAIProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GooseAIProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .finish()
    }
}

impl LLMProvider for GooseAIProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::GooseAI
    }

    fn param_table(&self) -> &'static ParamTable {
        &GOOSEAI_TABLE
    }

    fn params(&self) -> &EffectiveParams {
        &self.params
    }

    fn build_request(&self, prompt: &str, overrides: &Overrides) -> Result<PreparedRequest, Error> {
        let resolved = self.params.resolve(overrides)?;
        let url = format!(
            "{}/engines/{}/completions",
            self.base_url,
            resolved.selection()
        );

        Ok(PreparedRequest::new(
            url,
            bearer_headers(self.api_key.as_deref()),
            resolved.into_body(prompt),
        ))
    }

    fn extract_completion(&self, raw_response: &Value) -> Result<String, Error> {
        extract_text(GOOSEAI_TABLE.provider, raw_response, &COMPLETION_TEXT_PATH)
    }
}
