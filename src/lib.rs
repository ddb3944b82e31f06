//! A unified text-completion abstraction over multiple hosted LLM providers.
//!
//! This library translates a prompt and canonical generation parameters into the
//! request shapes of AI21, Cohere, GooseAI and OpenAI, and normalizes their responses
//! into a single [`Completion`].

pub mod client;
pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod response;
pub mod transport;
pub mod types;

// Re-export core types for easy usage
pub use client::CompletionClient;
pub use error::{Error, ErrorKind};
pub use factory::{ProviderConfig, ProviderFactory, ProviderType};
pub use provider::{LLMProvider, ModelIdentity};
pub use providers::*;
pub use response::{Completion, PathSegment};
pub use transport::{HttpTransport, Transport};
pub use types::*;
