//! Moving-window math over price series.
//!
//! Series helpers return one `Option<f64>` per input element; `None` marks
//! the warm-up region where the window is not yet full.

/// True Range of a candle given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// One EMA step with smoothing factor 2/(period+1).
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    alpha * value + (1.0 - alpha) * previous
}

/// One Wilder smoothing step: (previous·(period−1) + value) / period.
pub fn wilder_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    (previous * (period as f64 - 1.0) + value) / period as f64
}

/// Population standard deviation of `values`.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        window.iter().sum::<f64>() / window.len() as f64
    })
}

pub fn std_dev_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, population_std_dev)
}

pub fn rolling_min_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        window.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

pub fn rolling_max_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// EMA seeded with the SMA of the first `period` values.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    recursive(values, period, ema_from_previous)
}

/// Wilder's smoothed moving average (RMA), seeded with the SMA of the first
/// `period` values.
pub fn wilder_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    recursive(values, period, wilder_from_previous)
}

/// Apply a series function to the defined tail of a partially defined series.
///
/// The leading `None` run is skipped, `f` runs over the contiguous `Some`
/// values that follow, and the result is re-aligned to the input indices.
pub fn on_defined<F>(values: &[Option<f64>], f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Vec<Option<f64>>,
{
    let mut out = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };
    let defined: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in f(&defined).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}

fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for (i, window) in values.windows(period).enumerate() {
        out[i + period - 1] = Some(f(window));
    }
    out
}

fn recursive<F>(values: &[f64], period: usize, step: F) -> Vec<Option<f64>>
where
    F: Fn(f64, f64, usize) -> f64,
{
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let mut current = values[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(current);
    for (i, &value) in values.iter().enumerate().skip(period) {
        current = step(value, current, period);
        out[i] = Some(current);
    }
    out
}
