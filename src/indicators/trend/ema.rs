//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::{Candle, EmaIndicator};

/// EMA of closes for every candle
pub fn ema_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period as usize)
}

/// Calculate EMA for a specific period
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    let value = ema_series(candles, period).last().copied().flatten()?;
    Some(EmaIndicator { value, period })
}

/// Calculate multiple EMAs at once
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<EmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(candles, period))
        .collect()
}
