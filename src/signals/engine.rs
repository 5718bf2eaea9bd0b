//! Candles in, classified snapshot out.

use crate::indicators::{IndicatorEngine, IndicatorError};
use crate::models::indicators::{Candle, IndicatorSnapshot};
use crate::models::signal::{Bias, Signal};
use crate::signals::classifier::SignalClassifier;

pub use crate::indicators::MIN_CANDLES;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute indicators over the candles and classify the last bar.
    pub fn evaluate(candles: &[Candle]) -> Result<(IndicatorSnapshot, Signal), IndicatorError> {
        let snapshot = IndicatorEngine::latest(candles)?;
        Ok((snapshot, SignalClassifier::classify(&snapshot)))
    }

    /// Same as [`SignalEngine::evaluate`] but with the bias classifier.
    pub fn evaluate_bias(candles: &[Candle]) -> Result<(IndicatorSnapshot, Bias), IndicatorError> {
        let snapshot = IndicatorEngine::latest(candles)?;
        Ok((snapshot, SignalClassifier::classify_bias(&snapshot)))
    }
}
