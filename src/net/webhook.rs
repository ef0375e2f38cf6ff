//! Summarization webhook client.
//!
//! Client-side (csr): a single `POST` via `gloo-net`.
//! Native builds: returns [`WebhookError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use std::future::Future;

#[cfg(any(test, feature = "csr"))]
use super::types::WebhookRequest;
use super::types::WebhookResponse;

/// Errors produced by a summarization request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook responded with status {0}")]
    Status(u16),

    #[error("webhook request failed: {0}")]
    Network(String),

    #[error("webhook response could not be decoded: {0}")]
    Decode(String),

    #[error("webhook not available outside the browser")]
    Unavailable,
}

/// An endpoint that turns a video URL into a title and summary.
pub trait SummaryWebhook {
    fn summarize(&self, video_url: &str) -> impl Future<Output = Result<WebhookResponse, WebhookError>>;
}

/// [`SummaryWebhook`] over plain HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpWebhook {
    url: String,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SummaryWebhook for HttpWebhook {
    async fn summarize(&self, video_url: &str) -> Result<WebhookResponse, WebhookError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url)
                .json(&request_body(video_url))
                .map_err(|e| WebhookError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| WebhookError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(WebhookError::Status(resp.status()));
            }
            let text = resp.text().await.map_err(|e| WebhookError::Network(e.to_string()))?;
            parse_response(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = video_url;
            Err(WebhookError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn request_body(video_url: &str) -> WebhookRequest {
    WebhookRequest {
        video_url: video_url.to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_response(body: &str) -> Result<WebhookResponse, WebhookError> {
    serde_json::from_str(body).map_err(|e| WebhookError::Decode(e.to_string()))
}
