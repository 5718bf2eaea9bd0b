//! Fixed-threshold classification of the latest indicator snapshot.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Bias, Signal};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const BIAS_RSI_BULLISH: f64 = 55.0;
pub const BIAS_RSI_BEARISH: f64 = 45.0;

pub struct SignalClassifier;

impl SignalClassifier {
    /// BUY when trend and momentum agree upward and RSI is not overbought,
    /// SELL for the mirrored case, HOLD otherwise.
    pub fn classify(snapshot: &IndicatorSnapshot) -> Signal {
        if snapshot.ema_fast > snapshot.ema_slow
            && snapshot.macd > snapshot.macd_signal
            && snapshot.rsi < RSI_OVERBOUGHT
        {
            Signal::Buy
        } else if snapshot.ema_fast < snapshot.ema_slow
            && snapshot.macd < snapshot.macd_signal
            && snapshot.rsi > RSI_OVERSOLD
        {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }

    /// Next-session bias from the EMA trend and RSI alone.
    pub fn classify_bias(snapshot: &IndicatorSnapshot) -> Bias {
        if snapshot.ema_fast > snapshot.ema_slow && snapshot.rsi > BIAS_RSI_BULLISH {
            Bias::BuySide
        } else if snapshot.ema_fast < snapshot.ema_slow && snapshot.rsi < BIAS_RSI_BEARISH {
            Bias::SellSide
        } else {
            Bias::Neutral
        }
    }
}
