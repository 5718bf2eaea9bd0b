//! Per-symbol results of a refresh cycle.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::indicators::IndicatorError;
use crate::models::dashboard::{BiasRow, DashboardSnapshot, IndicatorStatusRow, LiveRow};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::Signal;
use crate::notifications::NotifyOutcome;
use crate::services::market_data::MarketDataError;

/// Why a symbol produced no row this cycle.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("no data returned")]
    NoData,
    #[error(transparent)]
    InsufficientData(#[from] IndicatorError),
    #[error("fetch failed: {0}")]
    Fetch(#[from] MarketDataError),
}

impl SymbolError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            SymbolError::NoData => "no_data",
            SymbolError::InsufficientData(_) => "insufficient_data",
            SymbolError::Fetch(_) => "fetch_failure",
        }
    }
}

/// A symbol's live evaluation, including what the notifier did with it.
#[derive(Debug)]
pub struct LiveEvaluation {
    pub snapshot: IndicatorSnapshot,
    pub signal: Signal,
    pub live_row: LiveRow,
    pub indicator_row: IndicatorStatusRow,
    pub notification: NotifyOutcome,
}

#[derive(Debug)]
pub struct SymbolOutcome<T> {
    pub symbol: String,
    pub result: Result<T, SymbolError>,
}

impl<T> SymbolOutcome<T> {
    pub fn new(symbol: impl Into<String>, result: Result<T, SymbolError>) -> Self {
        Self {
            symbol: symbol.into(),
            result,
        }
    }
}

/// Everything one refresh cycle produced.
#[derive(Debug)]
pub struct CycleReport {
    pub live: Vec<SymbolOutcome<LiveEvaluation>>,
    pub bias: Vec<SymbolOutcome<BiasRow>>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CycleReport {
    /// Rows for the dashboard, in watchlist order, failed symbols omitted.
    pub fn to_snapshot(&self) -> DashboardSnapshot {
        let evaluated: Vec<&LiveEvaluation> =
            self.live.iter().filter_map(|o| o.result.as_ref().ok()).collect();

        DashboardSnapshot {
            live: evaluated.iter().map(|e| e.live_row.clone()).collect(),
            indicators: evaluated.iter().map(|e| e.indicator_row.clone()).collect(),
            bias: self
                .bias
                .iter()
                .filter_map(|o| o.result.as_ref().ok().cloned())
                .collect(),
            updated_at: Some(self.finished_at),
        }
    }

    /// Alerts triggered this cycle, delivered or not.
    pub fn alerts_triggered(&self) -> usize {
        self.live
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .filter(|e| e.notification.is_triggered())
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.live.iter().filter(|o| o.result.is_err()).count()
            + self.bias.iter().filter(|o| o.result.is_err()).count()
    }
}
