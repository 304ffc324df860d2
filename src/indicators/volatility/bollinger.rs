//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::{BollingerBandsIndicator, Candle};

/// Bollinger Bands for every candle
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn bollinger_series(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Vec<Option<BollingerBandsIndicator>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middles = math::sma_series(&closes, period as usize);
    let deviations = math::std_dev_series(&closes, period as usize);

    middles
        .iter()
        .zip(&deviations)
        .map(|(middle, deviation)| {
            let (middle, deviation) = ((*middle)?, (*deviation)?);
            Some(BollingerBandsIndicator {
                upper: middle + std_dev * deviation,
                middle,
                lower: middle - std_dev * deviation,
            })
        })
        .collect()
}

/// Calculate Bollinger Bands
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    bollinger_series(candles, period, std_dev)
        .last()
        .copied()
        .flatten()
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
