//! Computes the full indicator set the classifiers read.

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_ema;
use crate::models::indicators::{Candle, IndicatorSeries, IndicatorSnapshot};

pub const EMA_FAST_PERIOD: u32 = 8;
pub const EMA_SLOW_PERIOD: u32 = 21;
pub const RSI_PERIOD: u32 = 14;
pub const MACD_FAST_PERIOD: u32 = 12;
pub const MACD_SLOW_PERIOD: u32 = 26;
pub const MACD_SIGNAL_PERIOD: u32 = 9;

/// Bars needed before the MACD signal line, the slowest component, is
/// defined on the last bar.
pub const MIN_CANDLES: usize = (MACD_SLOW_PERIOD + MACD_SIGNAL_PERIOD - 1) as usize;

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Per-bar series for every indicator.
    pub fn compute(candles: &[Candle]) -> Result<IndicatorSeries, IndicatorError> {
        if candles.len() < MIN_CANDLES {
            return Err(IndicatorError::InsufficientData {
                required: MIN_CANDLES,
                available: candles.len(),
            });
        }

        let macd = calculate_macd(
            candles,
            MACD_FAST_PERIOD,
            MACD_SLOW_PERIOD,
            MACD_SIGNAL_PERIOD,
        );
        Ok(IndicatorSeries {
            ema_fast: calculate_ema(candles, EMA_FAST_PERIOD),
            ema_slow: calculate_ema(candles, EMA_SLOW_PERIOD),
            rsi: calculate_rsi(candles, RSI_PERIOD),
            macd: macd.macd,
            macd_signal: macd.signal,
        })
    }

    /// Snapshot of the last bar. Fails unless every component is defined.
    pub fn latest(candles: &[Candle]) -> Result<IndicatorSnapshot, IndicatorError> {
        let series = Self::compute(candles)?;
        let insufficient = || IndicatorError::InsufficientData {
            required: MIN_CANDLES,
            available: candles.len(),
        };

        let last = candles.last().ok_or_else(insufficient)?;
        let (ema_fast, ema_slow, rsi, macd, macd_signal) = series
            .values_at(candles.len() - 1)
            .ok_or_else(insufficient)?;

        Ok(IndicatorSnapshot {
            timestamp: last.timestamp,
            close: last.close,
            ema_fast,
            ema_slow,
            rsi,
            macd,
            macd_signal,
        })
    }
}
