//! Telegram Bot API alert sink.

use async_trait::async_trait;
use std::time::Duration;

use super::{Alert, AlertSink, NotifyError};
use crate::config::TelegramConfig;

pub struct TelegramAlertSink {
    endpoint: String,
    chat_id: String,
    http: reqwest::Client,
}

impl TelegramAlertSink {
    pub fn new(config: &TelegramConfig, timeout: Duration) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: &TelegramConfig, http: reqwest::Client) -> Self {
        let endpoint = format!(
            "{}/bot{}/sendMessage",
            config.base_url.trim_end_matches('/'),
            config.bot_token
        );
        Self {
            endpoint,
            chat_id: config.chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl AlertSink for TelegramAlertSink {
    /// Single best-effort POST; no retry.
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        let text = alert.message();
        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text.as_str())])
            .send()
            .await
            // The endpoint embeds the bot token.
            .map_err(|e| NotifyError::Http(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
