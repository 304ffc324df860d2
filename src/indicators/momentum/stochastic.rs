//! Stochastic oscillator and Stochastic-RSI

use crate::common::math;
use crate::indicators::momentum::rsi::rsi_series;
use crate::models::indicators::{Candle, StochasticIndicator};

/// Raw value reported when the lookback window has no range.
const FLAT_WINDOW_VALUE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StochasticPeriods {
    /// Lookback for the highest/lowest window.
    pub length: usize,
    /// SMA smoothing applied to the raw value to produce %K.
    pub k_smoothing: usize,
    /// SMA of %K producing %D.
    pub d_smoothing: usize,
}

impl Default for StochasticPeriods {
    fn default() -> Self {
        Self {
            length: 14,
            k_smoothing: 3,
            d_smoothing: 3,
        }
    }
}

impl StochasticPeriods {
    /// Candles needed after the source series starts before %D is defined.
    pub fn warm_up(&self) -> usize {
        self.length + self.k_smoothing + self.d_smoothing - 2
    }
}

fn position_in_range(value: f64, lowest: f64, highest: f64) -> f64 {
    let range = highest - lowest;
    if range == 0.0 {
        return FLAT_WINDOW_VALUE;
    }
    (100.0 * (value - lowest) / range).clamp(0.0, 100.0)
}

fn smooth(raw: &[Option<f64>], periods: StochasticPeriods) -> Vec<Option<StochasticIndicator>> {
    let k = math::on_defined(raw, |values| math::sma_series(values, periods.k_smoothing));
    let d = math::on_defined(&k, |values| math::sma_series(values, periods.d_smoothing));
    k.iter()
        .zip(&d)
        .map(|(k, d)| {
            Some(StochasticIndicator {
                k: (*k)?,
                d: (*d)?,
            })
        })
        .collect()
}

/// Classic Stochastic(length, k, d) over close within the high/low range.
///
/// raw = 100 * (close - lowest_low) / (highest_high - lowest_low)
pub fn stochastic_series(
    candles: &[Candle],
    periods: StochasticPeriods,
) -> Vec<Option<StochasticIndicator>> {
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    let highest = math::rolling_max_series(&highs, periods.length);
    let lowest = math::rolling_min_series(&lows, periods.length);

    let raw: Vec<Option<f64>> = candles
        .iter()
        .zip(lowest.iter().zip(&highest))
        .map(|(candle, (low, high))| Some(position_in_range(candle.close, (*low)?, (*high)?)))
        .collect();
    smooth(&raw, periods)
}

/// Stochastic formula applied to the RSI series instead of price.
pub fn stoch_rsi_series(
    closes: &[f64],
    rsi_period: usize,
    periods: StochasticPeriods,
) -> Vec<Option<StochasticIndicator>> {
    let rsi = rsi_series(closes, rsi_period);
    let raw = math::on_defined(&rsi, |values| {
        let lowest = math::rolling_min_series(values, periods.length);
        let highest = math::rolling_max_series(values, periods.length);
        values
            .iter()
            .zip(lowest.iter().zip(&highest))
            .map(|(value, (low, high))| Some(position_in_range(*value, (*low)?, (*high)?)))
            .collect()
    });
    smooth(&raw, periods)
}

/// Calculate classic Stochastic for the latest candle
pub fn calculate_stochastic(
    candles: &[Candle],
    periods: StochasticPeriods,
) -> Option<StochasticIndicator> {
    stochastic_series(candles, periods).last().copied().flatten()
}

/// Calculate Stochastic-RSI for the latest candle
pub fn calculate_stoch_rsi(
    candles: &[Candle],
    rsi_period: usize,
    periods: StochasticPeriods,
) -> Option<StochasticIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    stoch_rsi_series(&closes, rsi_period, periods)
        .last()
        .copied()
        .flatten()
}
