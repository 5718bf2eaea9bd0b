//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::Candle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// Calculate MACD for every bar
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
///
/// MACD is defined from index `slow - 1`, the signal line from
/// `slow + signal - 2`.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_ema = math::ema_series(&closes, fast_period as usize);
    let slow_ema = math::ema_series(&closes, slow_period as usize);

    let macd: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(fast, slow)| Some((*fast)? - (*slow)?))
        .collect();
    let signal = math::ema_series_from_partial(&macd, signal_period as usize);

    MacdSeries { macd, signal }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> MacdSeries {
    calculate_macd(candles, 12, 26, 9)
}
