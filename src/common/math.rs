//! Moving-average primitives over plain `f64` slices.

/// Simple average of the first `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[..period].iter().sum::<f64>() / period as f64)
}

/// Smoothing factor `2 / (period + 1)`.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one value. Written as a correction to `previous` so a
/// constant input leaves the EMA exactly on that constant.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    previous + ema_alpha(period) * (value - previous)
}

/// EMA over the whole input, seeded with the SMA of the first `period`
/// values. The result has the same length as `values`; the first
/// `period - 1` entries are `None`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let Some(seed) = sma(values, period) else {
        return out;
    };

    out[period - 1] = Some(seed);
    let mut previous = seed;
    for (i, &value) in values.iter().enumerate().skip(period) {
        previous = ema_from_previous(value, previous, period);
        out[i] = Some(previous);
    }
    out
}

/// EMA over a series whose leading entries may be undefined. Smoothing
/// starts at the first defined entry; the output keeps input alignment.
pub fn ema_series_from_partial(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };

    let defined: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in ema_series(&defined, period).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}
