//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::{AtrIndicator, Candle};

/// ATR for every candle using Wilder smoothing of the True Range.
///
/// True Range needs a previous close, so the first candle has none and the
/// first ATR value lands on index `period`.
pub fn atr_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let true_ranges: Vec<Option<f64>> = std::iter::once(None)
        .chain(
            candles
                .windows(2)
                .map(|pair| Some(math::true_range(pair[1].high, pair[1].low, pair[0].close))),
        )
        .take(candles.len())
        .collect();

    math::on_defined(&true_ranges, |values| {
        math::wilder_series(values, period as usize)
    })
}

/// Calculate ATR (Average True Range)
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrIndicator> {
    let value = atr_series(candles, period).last().copied().flatten()?;
    Some(AtrIndicator { value, period })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrIndicator> {
    calculate_atr(candles, 14)
}
