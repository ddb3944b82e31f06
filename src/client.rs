//! The request lifecycle shared by every provider.

use std::sync::Arc;

use crate::provider::LLMProvider;
use crate::transport::{HttpTransport, Transport};
use crate::{Completion, Error, Overrides};

/// Runs completions against one provider.
///
/// Each call builds its own request and holds no state between calls, so a
/// single client may serve many concurrent `complete` calls.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn LLMProvider>,
    transport: Arc<dyn Transport>,
}

impl CompletionClient {
    /// Create a client that talks HTTP with default settings.
    pub fn new(provider: impl LLMProvider) -> Self {
        Self::with_transport(Arc::new(provider), Arc::new(HttpTransport::new()))
    }

    /// Create a client for a provider built by [`crate::ProviderFactory`].
    pub fn from_boxed(provider: Box<dyn LLMProvider>) -> Self {
        Self::with_transport(Arc::from(provider), Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(provider: Arc<dyn LLMProvider>, transport: Arc<dyn Transport>) -> Self {
        Self {
            provider,
            transport,
        }
    }

    pub fn provider(&self) -> &dyn LLMProvider {
        self.provider.as_ref()
    }

    /// Complete `prompt`, with `overrides` applying to this call only.
    #[tracing::instrument(
        name = "complete",
        skip_all,
        fields(provider = %self.provider.provider_type(), model = %self.provider.params().selection()),
        err
    )]
    pub async fn complete(&self, prompt: &str, overrides: &Overrides) -> Result<Completion, Error> {
        let request = self.provider.build_request(prompt, overrides)?;
        let raw_response = self.transport.post_json(&request).await?;
        let completion_text = self.provider.extract_completion(&raw_response)?;

        tracing::debug!(bytes = completion_text.len(), "completion received");

        Ok(Completion {
            prompt: prompt.to_string(),
            completion_text,
            raw_response,
            request_params: request.body,
        })
    }
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("provider", &self.provider.provider_type())
            .finish_non_exhaustive()
    }
}
