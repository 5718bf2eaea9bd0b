//! Wires configuration into a ready-to-run dashboard runtime.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::core::runtime::{DashboardRuntime, RuntimeConfig};
use crate::jobs::context::JobContext;
use crate::metrics::Metrics;
use crate::notifications::{
    AlertSink, ChangeNotifier, LogOnlyAlertSink, NotifyError, TelegramAlertSink,
};
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use crate::services::yahoo::YahooMarketDataProvider;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("market data client: {0}")]
    MarketData(#[from] MarketDataError),
    #[error("alert client: {0}")]
    Alerts(#[from] NotifyError),
}

/// Telegram when credentials are configured, log-only otherwise.
pub fn build_alert_sink(config: &DashboardConfig) -> Result<Arc<dyn AlertSink>, NotifyError> {
    match config.telegram {
        Some(ref telegram) => {
            info!(chat_id = %telegram.chat_id, "Telegram alerts enabled");
            Ok(Arc::new(TelegramAlertSink::new(telegram, config.http_timeout)?))
        }
        None => {
            warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set, alerts will only be logged");
            Ok(Arc::new(LogOnlyAlertSink))
        }
    }
}

/// Build a runtime backed by Yahoo Finance and the configured alert sink.
pub fn build_runtime(
    config: DashboardConfig,
    metrics: Option<Arc<Metrics>>,
) -> Result<DashboardRuntime, BootstrapError> {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooMarketDataProvider::new(&config)?);
    let sink = build_alert_sink(&config)?;
    Ok(build_runtime_with(config, provider, sink, metrics))
}

/// Build a runtime from explicit collaborators.
pub fn build_runtime_with(
    config: DashboardConfig,
    provider: Arc<dyn MarketDataProvider>,
    sink: Arc<dyn AlertSink>,
    metrics: Option<Arc<Metrics>>,
) -> DashboardRuntime {
    let mut notifier = ChangeNotifier::new(sink);
    if let Some(ref metrics) = metrics {
        notifier = notifier.with_metrics(metrics.clone());
    }

    let runtime_config = RuntimeConfig {
        refresh_interval_seconds: config.refresh_interval_seconds,
        symbols: config.watchlist.clone(),
    };
    let context = Arc::new(JobContext::new(provider, notifier, Arc::new(config), metrics));
    DashboardRuntime::new(runtime_config, context)
}
