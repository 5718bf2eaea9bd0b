//! Unit tests for the indicator engine

use intradash::indicators::{IndicatorEngine, IndicatorError, MIN_CANDLES};
use tokio_test::{assert_err, assert_ok};

use crate::fixtures::{flat_candles, uptrend_candles};

#[test]
fn test_min_candles_covers_macd_signal() {
    assert_eq!(MIN_CANDLES, 34);
}

#[test]
fn test_empty_series_is_insufficient() {
    assert_eq!(
        IndicatorEngine::latest(&[]).unwrap_err(),
        IndicatorError::InsufficientData {
            required: MIN_CANDLES,
            available: 0
        }
    );
}

#[test]
fn test_short_series_is_insufficient() {
    let candles = flat_candles(MIN_CANDLES - 1);
    assert_err!(IndicatorEngine::compute(&candles));
    assert_eq!(
        IndicatorEngine::latest(&candles).unwrap_err(),
        IndicatorError::InsufficientData {
            required: MIN_CANDLES,
            available: MIN_CANDLES - 1
        }
    );
}

#[test]
fn test_minimum_series_yields_complete_snapshot() {
    let candles = flat_candles(MIN_CANDLES);
    let snapshot = assert_ok!(IndicatorEngine::latest(&candles));
    assert_eq!(snapshot.close, 250.0);
    assert_eq!(snapshot.rsi, 100.0);
}

#[test]
fn test_series_early_entries_are_undefined() {
    let candles = uptrend_candles();
    let series = IndicatorEngine::compute(&candles).unwrap();

    assert_eq!(series.len(), candles.len());
    assert!(series.values_at(MIN_CANDLES - 2).is_none());
    assert!(series.values_at(MIN_CANDLES - 1).is_some());
    assert!(series.values_at(candles.len()).is_none());
}

#[test]
fn test_latest_snapshot_describes_last_bar() {
    let candles = uptrend_candles();
    let snapshot = IndicatorEngine::latest(&candles).unwrap();
    let last = candles.last().unwrap();

    assert_eq!(snapshot.timestamp, last.timestamp);
    assert_eq!(snapshot.close, last.close);
    assert!(snapshot.ema_fast.is_finite());
    assert!(snapshot.macd_signal.is_finite());
}
