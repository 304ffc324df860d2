//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::{Candle, RsiIndicator};

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// RSI for every close, using Wilder smoothing of gains and losses.
///
/// RSI = 100 - (100 / (1 + RS)), RS = avg_gain / avg_loss.
/// An average loss of zero yields 100. The first value lands on index
/// `period` (the first `period` changes seed the averages).
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            }
        })
        .unzip();

    let avg_gains = math::wilder_series(&gains, period);
    let avg_losses = math::wilder_series(&losses, period);

    for (i, (gain, loss)) in avg_gains.iter().zip(&avg_losses).enumerate() {
        if let (Some(gain), Some(loss)) = (gain, loss) {
            out[i + 1] = Some(rsi_from_averages(*gain, *loss));
        }
    }
    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate RSI for the latest candle
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = rsi_series(&closes, period as usize).last().copied().flatten()?;
    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, DEFAULT_RSI_PERIOD)
}
