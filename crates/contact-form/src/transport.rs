//! Webhook transport
//!
//! The controller only needs one suspend point per submission: send the
//! prepared request and get back a status or a transport failure. The response
//! body is never read.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::error::TransportError;
use crate::payload::WebhookRequest;

/// Status line of the webhook's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub status_text: String,
}

impl WebhookResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    /// Any 2xx status
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends a prepared webhook request
///
/// Futures are not required to be `Send`: the browser host is single-threaded.
#[async_trait(?Send)]
pub trait WebhookTransport {
    async fn send(&self, request: &WebhookRequest) -> Result<WebhookResponse, TransportError>;
}

/// Transport backed by `reqwest` (uses `fetch` when compiled to wasm32)
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl WebhookTransport for ReqwestTransport {
    async fn send(&self, request: &WebhookRequest) -> Result<WebhookResponse, TransportError> {
        let body = request
            .body_json()
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;

        tracing::debug!(url = %request.url, "POST webhook");

        let response = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, WebhookRequest::CONTENT_TYPE)
            .header(AUTHORIZATION, request.authorization.as_str())
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Webhook responded");

        Ok(WebhookResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ))
    }
}
