//! Discord webhook delivery

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{AlertError, AlertSink};

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

#[derive(Debug, Clone)]
pub struct DiscordWebhookSink {
    http: Client,
    webhook_url: String,
}

impl DiscordWebhookSink {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_client(webhook_url, Client::new())
    }

    pub fn with_client(webhook_url: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl AlertSink for DiscordWebhookSink {
    async fn send(&self, message: &str) -> Result<(), AlertError> {
        let response = self
            .http
            .post(&self.webhook_url)
            .json(&WebhookPayload { content: message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "DiscordWebhookSink: alert delivered");
        Ok(())
    }
}
