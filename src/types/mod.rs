//! Core types used throughout the library.

pub mod overrides;
pub mod params;
pub mod request;

// Re-export commonly used types
pub use overrides::*;
pub use params::*;
pub use request::PreparedRequest;
