//! # Transport
//!
//! The seam between the editor and the admin server. [`HttpTransport`] is the
//! real implementation; tests use
//! [`ScriptedTransport`](crate::editor::testing::ScriptedTransport).

use super::context::CSRF_HEADER;
use super::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Issues form POSTs and returns the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `form` to `path` (relative to the server origin), sending
    /// `csrf_token` in the anti-forgery header when present.
    async fn post_form(
        &self,
        path: &str,
        form: &[(&'static str, String)],
        csrf_token: Option<&str>,
    ) -> Result<serde_json::Value, TransportError>;
}

/// [`Transport`] over HTTP(S) with `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    origin: Url,
}

impl HttpTransport {
    pub fn new(origin: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// A non-2xx answer whose body is still JSON is returned as-is so the
    /// caller can read its `success` flag; anything else is a transport error.
    #[instrument(skip(self, form, csrf_token), fields(origin = %self.origin))]
    async fn post_form(
        &self,
        path: &str,
        form: &[(&'static str, String)],
        csrf_token: Option<&str>,
    ) -> Result<serde_json::Value, TransportError> {
        let url = self
            .origin
            .join(path)
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let mut request = self.client.post(url).form(form);
        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request failed");
            TransportError::Network(e.to_string())
        })?;
        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(TransportError::Status(status.as_u16())),
            Err(e) => Err(TransportError::Decode(e.to_string())),
        }
    }
}
