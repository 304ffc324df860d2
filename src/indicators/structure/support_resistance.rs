//! Swing support and resistance detection
//!
//! A candle's low is a support pivot when it is strictly lower than every low
//! in the `lookback` candles before it and the `lookback` candles after it.
//! Resistance pivots mirror this on highs. Raw pivots are deduplicated per
//! pool in time order: the earliest level wins and later levels within the
//! relative threshold of a kept level are dropped.

use crate::models::indicators::Candle;
use crate::models::levels::PivotLevels;

pub const DEFAULT_PIVOT_LOOKBACK: usize = 60;
pub const DEFAULT_LEVEL_THRESHOLD: f64 = 0.02;

/// Detect deduplicated support and resistance levels
pub fn detect_support_resistance(
    candles: &[Candle],
    lookback: usize,
    threshold: f64,
) -> PivotLevels {
    let mut support = Vec::new();
    let mut resistance = Vec::new();

    if lookback == 0 || candles.len() < 2 * lookback + 1 {
        return PivotLevels::default();
    }

    for i in lookback..candles.len() - lookback {
        let before = &candles[i - lookback..i];
        let after = &candles[i + 1..=i + lookback];
        let low = candles[i].low;
        let high = candles[i].high;

        if before.iter().chain(after).all(|c| low < c.low) {
            support.push(low);
        }
        if before.iter().chain(after).all(|c| high > c.high) {
            resistance.push(high);
        }
    }

    PivotLevels {
        support: filter_levels(&support, threshold),
        resistance: filter_levels(&resistance, threshold),
    }
}

/// Detect levels with default lookback (60) and threshold (2%)
pub fn detect_support_resistance_default(candles: &[Candle]) -> PivotLevels {
    detect_support_resistance(candles, DEFAULT_PIVOT_LOOKBACK, DEFAULT_LEVEL_THRESHOLD)
}

/// Greedy, order-dependent dedup; the kept set is returned sorted ascending.
pub fn filter_levels(levels: &[f64], threshold: f64) -> Vec<f64> {
    let mut kept: Vec<f64> = Vec::new();
    for &level in levels {
        if kept
            .iter()
            .all(|&existing| (level - existing).abs() / existing > threshold)
        {
            kept.push(level);
        }
    }
    kept.sort_by(f64::total_cmp);
    kept
}
