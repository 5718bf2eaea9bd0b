//! Emits an alert only when a symbol's signal changes into BUY or SELL.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::state::SignalStore;
use super::{Alert, AlertSink, NotifyError};
use crate::metrics::Metrics;
use crate::models::signal::Signal;

#[derive(Debug)]
pub enum NotifyOutcome {
    /// HOLD, or the same signal that was already alerted.
    Suppressed,
    Sent,
    /// Delivery failed; the stored signal was still updated.
    Failed(NotifyError),
}

impl NotifyOutcome {
    pub fn is_triggered(&self) -> bool {
        !matches!(self, NotifyOutcome::Suppressed)
    }
}

pub struct ChangeNotifier {
    sink: Arc<dyn AlertSink>,
    metrics: Option<Arc<Metrics>>,
}

impl ChangeNotifier {
    pub fn new(sink: Arc<dyn AlertSink>) -> Self {
        Self {
            sink,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// HOLD never alerts and never overwrites the stored signal, so
    /// BUY → HOLD → BUY alerts once.
    pub async fn notify(
        &self,
        state: &mut dyn SignalStore,
        symbol: &str,
        signal: Signal,
        rsi: f64,
    ) -> NotifyOutcome {
        if !signal.is_actionable() || state.last_signal(symbol) == Some(signal) {
            debug!(symbol = %symbol, signal = %signal, "no signal change to alert on");
            return NotifyOutcome::Suppressed;
        }

        state.record(symbol, signal);

        let alert = Alert::new(symbol, signal, rsi);
        match self.sink.send(&alert).await {
            Ok(()) => {
                info!(
                    symbol = %symbol,
                    signal = %signal,
                    rsi = rsi,
                    "alert sent: {}",
                    alert.message()
                );
                if let Some(ref metrics) = self.metrics {
                    metrics.alerts_sent_total.inc();
                }
                NotifyOutcome::Sent
            }
            Err(e) => {
                warn!(
                    symbol = %symbol,
                    signal = %signal,
                    error = %e,
                    "failed to deliver alert for {}",
                    symbol
                );
                if let Some(ref metrics) = self.metrics {
                    metrics.alerts_failed_total.inc();
                }
                NotifyOutcome::Failed(e)
            }
        }
    }
}
