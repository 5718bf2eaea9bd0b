//! Change-triggered signal alerts.

pub mod notifier;
pub mod state;
pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::signal::Signal;

pub use notifier::{ChangeNotifier, NotifyOutcome};
pub use state::{InMemorySignalStore, SignalStore};
pub use telegram::TelegramAlertSink;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("alert rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// One outbound alert for a signal transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub symbol: String,
    pub signal: Signal,
    pub rsi: f64,
}

impl Alert {
    pub fn new(symbol: impl Into<String>, signal: Signal, rsi: f64) -> Self {
        Self {
            symbol: symbol.into(),
            signal,
            rsi,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "🚨 {}: {} Signal triggered (RSI={:.1})",
            self.symbol, self.signal, self.rsi
        )
    }
}

/// Sink for alert notifications.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// Sink used when no alert channel is configured: the alert is only logged.
pub struct LogOnlyAlertSink;

#[async_trait]
impl AlertSink for LogOnlyAlertSink {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        info!(
            symbol = %alert.symbol,
            signal = %alert.signal,
            "alert channel disabled, not sending: {}",
            alert.message()
        );
        Ok(())
    }
}
