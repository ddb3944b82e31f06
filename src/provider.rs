use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::{EffectiveParams, Error, Overrides, ParamTable, PreparedRequest, ProviderType};

/// Identifies the backend and model behind a provider, for use in cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModelIdentity {
    pub model_name: String,
    pub model: String,
}

impl ModelIdentity {
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("model_name".to_string(), self.model_name.clone()),
            ("model".to_string(), self.model.clone()),
        ])
    }
}

/// A text-completion backend.
///
/// Implementations translate canonical requests into the backend's wire format
/// and pull the completion text back out of its responses. The HTTP exchange
/// itself lives in [`crate::CompletionClient`].
pub trait LLMProvider: Send + Sync + 'static {
    fn provider_type(&self) -> ProviderType;

    /// Parameter table this backend is driven by.
    fn param_table(&self) -> &'static ParamTable;

    /// Values stored at construction.
    fn params(&self) -> &EffectiveParams;

    /// Canonical parameter names this provider accepts, in table order.
    fn describe_inputs(&self) -> Vec<&'static str> {
        self.param_table().names().collect()
    }

    fn model_identity(&self) -> ModelIdentity {
        ModelIdentity {
            model_name: self.provider_type().as_str().to_string(),
            model: self.params().selection().to_string(),
        }
    }

    /// Translate a prompt and call-scoped overrides into a backend request.
    fn build_request(&self, prompt: &str, overrides: &Overrides) -> Result<PreparedRequest, Error>;

    /// Pull the first candidate's text out of a backend response.
    fn extract_completion(&self, raw_response: &Value) -> Result<String, Error>;
}
