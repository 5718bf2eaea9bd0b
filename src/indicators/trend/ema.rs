//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// EMA of closes for every bar.
///
/// Seeded with the simple average of the first `period` closes, so the
/// first `period - 1` entries are `None`.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period as usize)
}
