//! Chat webhook delivery.
//!
//! # Responsibilities
//! - POST `{"text": ...}` to `<base_url><path>`
//! - Report transport failures
//!
//! # Design Decisions
//! - Fire-and-forget: a non-success status is logged, never raised
//! - No retries; the next scheduled run posts a fresh prediction

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::WebhookConfig;

/// Errors that can occur while posting a message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Request failed before a response arrived.
    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Anything that can deliver a chat message.
pub trait Notifier {
    /// Deliver `text` to the webhook identified by `path`.
    fn notify(&self, path: &str, text: &str) -> impl Future<Output = DeliveryResult<()>> + Send;
}

/// Slack-compatible incoming webhook payload.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub text: &'a str,
}

/// Incoming-webhook client.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    base_url: String,
}

impl WebhookNotifier {
    /// Create a notifier posting under `config.base_url`.
    pub fn new(config: &WebhookConfig) -> DeliveryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeliveryError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Full URL for a resolved path. The path is appended verbatim.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Notifier for WebhookNotifier {
    async fn notify(&self, path: &str, text: &str) -> DeliveryResult<()> {
        // `json` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.url_for(path))
            .json(&WebhookPayload { text })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = %status, "Prediction posted");
        } else {
            tracing::warn!(status = %status, "Webhook returned non-success status");
        }
        Ok(())
    }
}
