use super::types::{AI21_BASE_URL, AI21_TABLE, COMPLETION_TEXT_PATH};
use crate::provider::LLMProvider;
use crate::response::extract_text;
use crate::types::request::bearer_headers;
use crate::{EffectiveParams, Error, Overrides, ParamTable, PreparedRequest, ProviderType};
use serde_json::Value;
use std::fmt;

/// AI21 Studio provider. The engine is part of the endpoint path.
#[derive(Clone)]
pub struct AI21Provider {
    api_key: Option<String>,
    base_url: String,
    params: EffectiveParams,
}

impl AI21Provider {
    pub fn new(api_key: Option<String>, overrides: Overrides) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, overrides, AI21_BASE_URL.to_string())
    }

    pub fn new_with_base_url(
        api_key: Option<String>,
        overrides: Overrides,
        base_url: String,
    ) -> Result<Self, Error> {
        let params = EffectiveParams::connect(&AI21_TABLE, &overrides)?;

        Ok(Self {
            api_key,
            base_url,
            params,
        })
    }
}

impl fmt::Debug for AI21Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AI21Provider")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .finish()
    }
}

impl LLMProvider for AI21Provider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::AI21
    }

    fn param_table(&self) -> &'static ParamTable {
        &AI21_TABLE
    }

    fn params(&self) -> &EffectiveParams {
        &self.params
    }

    fn build_request(&self, prompt: &str, overrides: &Overrides) -> Result<PreparedRequest, Error> {
        let resolved = self.params.resolve(overrides)?;
        let url = format!("{}/{}/complete", self.base_url, resolved.selection());

        Ok(PreparedRequest::new(
            url,
            bearer_headers(self.api_key.as_deref()),
            resolved.into_body(prompt),
        ))
    }

    fn extract_completion(&self, raw_response: &Value) -> Result<String, Error> {
        extract_text(AI21_TABLE.provider, raw_response, &COMPLETION_TEXT_PATH)
    }
}
