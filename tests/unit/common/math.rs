//! Unit tests for moving-average primitives

use intradash::common::math::{ema_alpha, ema_from_previous, ema_series, ema_series_from_partial, sma};
use intradash::indicators::momentum::calculate_macd_default;
use intradash::indicators::IndicatorEngine;

use crate::fixtures::{assert_close, flat_candles};

#[test]
fn test_sma_uses_first_period_values() {
    assert_eq!(sma(&[2.0, 4.0, 6.0, 100.0], 3), Some(4.0));
}

#[test]
fn test_sma_insufficient_data() {
    assert_eq!(sma(&[1.0, 2.0], 3), None);
    assert_eq!(sma(&[1.0, 2.0], 0), None);
}

#[test]
fn test_ema_alpha() {
    assert_close(ema_alpha(9), 0.2, 1e-12);
}

#[test]
fn test_ema_series_is_seeded_with_sma() {
    let values: Vec<f64> = (1..=10).map(f64::from).collect();
    let ema = ema_series(&values, 4);

    assert_eq!(ema.len(), values.len());
    assert!(ema[..3].iter().all(Option::is_none));
    let expected = [2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5];
    for (value, expected) in ema[3..].iter().zip(expected) {
        assert_close(value.unwrap(), expected, 1e-9);
    }
}

#[test]
fn test_ema_series_defined_count() {
    let values: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64).sin()).collect();
    for period in [1usize, 8, 21, 40] {
        let defined = ema_series(&values, period).iter().filter(|v| v.is_some()).count();
        assert_eq!(defined, values.len() - (period - 1), "period {}", period);
    }
}

#[test]
fn test_ema_series_too_short_is_all_none() {
    let ema = ema_series(&[1.0, 2.0, 3.0], 5);
    assert_eq!(ema, vec![None, None, None]);
}

#[test]
fn test_ema_series_from_partial_keeps_alignment() {
    let values = vec![None, None, Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
    let ema = ema_series_from_partial(&values, 2);

    assert_eq!(ema.len(), values.len());
    assert_eq!(&ema[..3], &[None, None, None]);
    assert_close(ema[3].unwrap(), 1.5, 1e-12);
    assert!(ema[5].is_some());
}

#[test]
fn test_ema_stays_exactly_on_constant_input() {
    let values = vec![250.0; 60];
    for period in [8usize, 12, 21, 26] {
        let ema = ema_series(&values, period);
        assert!(
            ema.iter().flatten().all(|&v| v == 250.0),
            "period {} drifted off the constant",
            period
        );
    }
    assert_eq!(ema_from_previous(250.0, 250.0, 21), 250.0);
}

#[test]
fn test_flat_closes_give_zero_macd_and_equal_emas() {
    let candles = flat_candles(60);
    let macd = calculate_macd_default(&candles);

    assert!(macd.macd.iter().flatten().all(|&v| v == 0.0));
    assert!(macd.signal.iter().flatten().all(|&v| v == 0.0));

    let snapshot = IndicatorEngine::latest(&candles).unwrap();
    assert_eq!(snapshot.ema_fast, snapshot.ema_slow);
    assert!(!snapshot.ema_bullish());
}
