pub mod ai21;
pub mod cohere;
pub mod gooseai;
pub mod openai;

use platformed_completions::ProviderType;
use serde_json::Value;
use wiremock::MockServer;

/// Provider configuration for cross-provider testing
#[derive(Debug, Clone)]
pub struct ProviderTestConfig {
    pub name: &'static str,
    pub provider_type: ProviderType,
    pub api_key: &'static str,
    /// Completion text the canned response carries in its first candidate
    pub expected_text: &'static str,
}

/// Trait for provider-specific test setup
#[async_trait::async_trait]
pub trait ProviderTestSetup {
    /// Get the provider configuration
    fn get_config() -> ProviderTestConfig;

    /// A response body in the backend's shape
    fn canned_response() -> Value;

    /// Mount the mock for a single completion of `prompt` with default parameters
    async fn mount_completion_mocks(
        mock_server: &MockServer,
        prompt: &str,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
