use crate::{
    AI21Provider, CohereProvider, CompletionClient, Error, GooseAIProvider, LLMProvider,
    OpenAIProvider, Overrides,
};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Supported completion backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    AI21,
    Cohere,
    GooseAI,
    OpenAI,
}

impl ProviderType {
    pub const ALL: [ProviderType; 4] = [
        ProviderType::AI21,
        ProviderType::Cohere,
        ProviderType::GooseAI,
        ProviderType::OpenAI,
    ];

    /// Registry name, also used as the backend family in model identities.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::AI21 => "ai21",
            ProviderType::Cohere => "cohere",
            ProviderType::GooseAI => "gooseai",
            ProviderType::OpenAI => "openai",
        }
    }

    /// Environment variable holding this backend's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderType::AI21 => "AI21_API_KEY",
            ProviderType::Cohere => "COHERE_API_KEY",
            ProviderType::GooseAI => "GOOSEAI_API_KEY",
            ProviderType::OpenAI => "OPENAI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "ai21" => Ok(ProviderType::AI21),
            "cohere" => Ok(ProviderType::Cohere),
            "gooseai" | "goose" => Ok(ProviderType::GooseAI),
            "openai" => Ok(ProviderType::OpenAI),
            _ => Err(Error::config(format!(
                "Invalid provider '{name}'. Valid values are: ai21, cohere, gooseai, openai"
            ))),
        }
    }
}

/// Configuration for creating providers.
#[derive(Clone)]
pub struct ProviderConfig {
    pub provider_type: ProviderType,
    pub api_key: Option<String>,
    pub overrides: Overrides,
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Configuration with no credential, default parameters and the backend's own URL.
    pub fn new(provider_type: ProviderType) -> Self {
        Self {
            provider_type,
            api_key: None,
            overrides: Overrides::new(),
            base_url: None,
        }
    }

    /// Create configuration for the AI21 provider.
    pub fn ai21(api_key: String) -> Self {
        Self::new(ProviderType::AI21).with_api_key(api_key)
    }

    /// Create configuration for the Cohere provider.
    pub fn cohere(api_key: String) -> Self {
        Self::new(ProviderType::Cohere).with_api_key(api_key)
    }

    /// Create configuration for the GooseAI provider.
    pub fn gooseai(api_key: String) -> Self {
        Self::new(ProviderType::GooseAI).with_api_key(api_key)
    }

    /// Create configuration for the OpenAI provider.
    pub fn openai(api_key: String) -> Self {
        Self::new(ProviderType::OpenAI).with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Construction-time parameter overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Create configuration from environment variables.
    ///
    /// `PROVIDER_TYPE` picks the backend explicitly; otherwise the first API key
    /// found among OpenAI, Cohere, AI21 and GooseAI decides.
    pub fn from_env() -> Result<Self, Error> {
        if let Ok(provider_type) = env::var("PROVIDER_TYPE") {
            let provider_type: ProviderType = provider_type.parse()?;
            let api_key = env::var(provider_type.api_key_var()).map_err(|_| {
                Error::config(format!(
                    "{} environment variable is required for {provider_type} provider",
                    provider_type.api_key_var()
                ))
            })?;
            return Ok(Self::new(provider_type).with_api_key(api_key));
        }

        // Fallback to credential-based inference
        for provider_type in [
            ProviderType::OpenAI,
            ProviderType::Cohere,
            ProviderType::AI21,
            ProviderType::GooseAI,
        ] {
            if let Ok(api_key) = env::var(provider_type.api_key_var()) {
                return Ok(Self::new(provider_type).with_api_key(api_key));
            }
        }

        Err(Error::config("No valid API credentials found in environment. Set PROVIDER_TYPE (ai21/cohere/gooseai/openai) with the matching API key"))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider_type", &self.provider_type)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("overrides", &self.overrides)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Factory for creating providers by name.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn LLMProvider>, Error> {
        let api_key = config.api_key.clone();
        let overrides = config.overrides.clone();

        let provider: Box<dyn LLMProvider> = match (config.provider_type, config.base_url.clone()) {
            (ProviderType::AI21, None) => Box::new(AI21Provider::new(api_key, overrides)?),
            (ProviderType::AI21, Some(url)) => {
                Box::new(AI21Provider::new_with_base_url(api_key, overrides, url)?)
            }
            (ProviderType::Cohere, None) => Box::new(CohereProvider::new(api_key, overrides)?),
            (ProviderType::Cohere, Some(url)) => {
                Box::new(CohereProvider::new_with_base_url(api_key, overrides, url)?)
            }
            (ProviderType::GooseAI, None) => Box::new(GooseAIProvider::new(api_key, overrides)?),
            (ProviderType::GooseAI, Some(url)) => {
                Box::new(GooseAIProvider::new_with_base_url(api_key, overrides, url)?)
            }
            (ProviderType::OpenAI, None) => Box::new(OpenAIProvider::new(api_key, overrides)?),
            (ProviderType::OpenAI, Some(url)) => {
                Box::new(OpenAIProvider::new_with_base_url(api_key, overrides, url)?)
            }
        };

        tracing::debug!(provider = %config.provider_type, model = %provider.params().selection(), "provider created");
        Ok(provider)
    }

    /// Create a provider and wrap it in a [`CompletionClient`].
    pub fn client(config: &ProviderConfig) -> Result<CompletionClient, Error> {
        Ok(CompletionClient::from_boxed(Self::create(config)?))
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<Box<dyn LLMProvider>, Error> {
        let config = ProviderConfig::from_env()?;
        Self::create(&config)
    }
}
