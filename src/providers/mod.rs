//! Provider implementations for different completion backends.

pub mod ai21;
pub mod cohere;
pub mod gooseai;
pub mod openai;

// Re-export commonly used provider types
pub use ai21::AI21Provider;
pub use cohere::CohereProvider;
pub use gooseai::GooseAIProvider;
pub use openai::OpenAIProvider;
