//! The HTTP exchange behind every completion call.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{Error, PreparedRequest};

/// Sends a prepared request and returns the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn post_json(&self, request: &PreparedRequest) -> Result<Value, Error>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with reqwest's default client settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller-configured client, e.g. one with a timeout or proxy.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(name = "http_post_json", skip(self, request), fields(url = %request.url), err)]
    async fn post_json(&self, request: &PreparedRequest) -> Result<Value, Error> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(status = %status, "API returned error status");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = %status, "HTTP request successful");
        Ok(response.json().await?)
    }
}
