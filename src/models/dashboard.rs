//! Row types backing the three dashboard tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::indicators::IndicatorSnapshot;
use super::signal::{Bias, Signal};

/// RSI strictly between these bounds is considered tradeable.
pub const RSI_LOWER_BOUND: f64 = 30.0;
pub const RSI_UPPER_BOUND: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiZone {
    Ok,
    Extreme,
}

impl RsiZone {
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > RSI_LOWER_BOUND && rsi < RSI_UPPER_BOUND {
            RsiZone::Ok
        } else {
            RsiZone::Extreme
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmaTrend {
    Above,
    Below,
}

/// Live per-symbol signal, price and evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveRow {
    pub symbol: String,
    pub last_price: f64,
    pub rsi: f64,
    pub signal: Signal,
    pub evaluated_at: DateTime<Utc>,
}

impl LiveRow {
    pub fn new(
        symbol: String,
        snapshot: &IndicatorSnapshot,
        signal: Signal,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol,
            last_price: round_to(snapshot.close, 2),
            rsi: round_to(snapshot.rsi, 2),
            signal,
            evaluated_at,
        }
    }
}

/// Qualitative status of each indicator behind a live signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorStatusRow {
    pub symbol: String,
    pub ema_bullish: bool,
    pub macd_bullish: bool,
    pub rsi: f64,
    pub rsi_zone: RsiZone,
    pub signal: Signal,
}

impl IndicatorStatusRow {
    pub fn new(symbol: String, snapshot: &IndicatorSnapshot, signal: Signal) -> Self {
        Self {
            symbol,
            ema_bullish: snapshot.ema_bullish(),
            macd_bullish: snapshot.macd_bullish(),
            rsi: round_to(snapshot.rsi, 1),
            rsi_zone: RsiZone::from_rsi(snapshot.rsi),
            signal,
        }
    }

    pub fn ema_label(&self) -> &'static str {
        if self.ema_bullish {
            "Buy"
        } else {
            "Sell"
        }
    }

    pub fn macd_label(&self) -> &'static str {
        if self.macd_bullish {
            "Bullish"
        } else {
            "Bearish"
        }
    }

    pub fn rsi_label(&self) -> String {
        let zone = match self.rsi_zone {
            RsiZone::Ok => "OK",
            RsiZone::Extreme => "Extreme",
        };
        format!("{:.1} {}", self.rsi, zone)
    }
}

/// Next-session bias computed from daily bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasRow {
    pub symbol: String,
    pub ema_trend: EmaTrend,
    pub rsi: f64,
    pub bias: Bias,
}

impl BiasRow {
    pub fn new(symbol: String, snapshot: &IndicatorSnapshot, bias: Bias) -> Self {
        let ema_trend = if snapshot.ema_bullish() {
            EmaTrend::Above
        } else {
            EmaTrend::Below
        };
        Self {
            symbol,
            ema_trend,
            rsi: round_to(snapshot.rsi, 1),
            bias,
        }
    }
}

/// Everything one refresh cycle publishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub live: Vec<LiveRow>,
    pub indicators: Vec<IndicatorStatusRow>,
    pub bias: Vec<BiasRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
