//! RSI (Relative Strength Index) indicator

use crate::models::indicators::Candle;

/// Calculate RSI for every bar using Wilder's smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The first average is the plain mean of the first `period` changes, so
/// the first defined entry sits at index `period`.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let period = period as usize;
    let mut out = vec![None; candles.len()];
    if period == 0 || candles.len() < period + 1 {
        return out;
    }

    let changes: Vec<f64> = candles.windows(2).map(|w| w[1].close - w[0].close).collect();
    let window = period as f64;

    let mut avg_gain = changes[..period].iter().map(|c| c.max(0.0)).sum::<f64>() / window;
    let mut avg_loss = changes[..period].iter().map(|c| (-c).max(0.0)).sum::<f64>() / window;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for (i, change) in changes.iter().enumerate().skip(period) {
        avg_gain = (avg_gain * (window - 1.0) + change.max(0.0)) / window;
        avg_loss = (avg_loss * (window - 1.0) + (-change).max(0.0)) / window;
        out[i + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Vec<Option<f64>> {
    calculate_rsi(candles, 14)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
