use thiserror::Error;

/// Errors that can occur when using the platformed-completions library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid configuration: {provider} {param} `{value}` must be one of: {allowed}")]
    InvalidSelection {
        provider: String,
        param: String,
        value: String,
        allowed: String,
    },

    #[error("Malformed response from {provider}: missing `{path}`")]
    MalformedResponse { provider: String, path: String },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected while constructing a provider or resolving its parameters.
    Configuration,
    /// The HTTP exchange failed or returned a non-success status.
    Transport,
    /// The response body did not have the shape the backend promises.
    MalformedResponse,
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn malformed(provider: impl Into<String>, path: impl Into<String>) -> Self {
        Error::MalformedResponse {
            provider: provider.into(),
            path: path.into(),
        }
    }

    pub fn invalid_selection(
        provider: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Error::InvalidSelection {
            provider: provider.into(),
            param: param.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) | Error::Status { .. } => ErrorKind::Transport,
            Error::Config(_) | Error::InvalidSelection { .. } => ErrorKind::Configuration,
            Error::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }
}
