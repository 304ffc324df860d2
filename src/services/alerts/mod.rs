//! Alert delivery.

pub mod discord;
pub mod format;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

pub use discord::DiscordWebhookSink;
pub use format::format_alert;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("alert rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), AlertError>;
}

/// Writes alerts to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn send(&self, message: &str) -> Result<(), AlertError> {
        info!(alert = %message, "LogAlertSink: alert");
        Ok(())
    }
}
