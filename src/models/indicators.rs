use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar for a single interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Per-bar indicator series. Entries are `None` until the window behind
/// them is full.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub ema_fast: Vec<Option<f64>>,
    pub ema_slow: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        self.ema_fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ema_fast.is_empty()
    }

    /// Values at bar `index`, if every component is defined there.
    pub fn values_at(&self, index: usize) -> Option<(f64, f64, f64, f64, f64)> {
        Some((
            (*self.ema_fast.get(index)?)?,
            (*self.ema_slow.get(index)?)?,
            (*self.rsi.get(index)?)?,
            (*self.macd.get(index)?)?,
            (*self.macd_signal.get(index)?)?,
        ))
    }
}

/// Fully-defined indicator values for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
}

impl IndicatorSnapshot {
    pub fn ema_bullish(&self) -> bool {
        self.ema_fast > self.ema_slow
    }

    pub fn macd_bullish(&self) -> bool {
        self.macd > self.macd_signal
    }
}
