//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::{Candle, MacdIndicator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdPeriods {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdPeriods {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdPeriods {
    /// Candles needed before the histogram is defined.
    pub fn warm_up(&self) -> usize {
        self.fast.max(self.slow) + self.signal - 1
    }
}

/// MACD line, signal line and histogram for every close.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn macd_series(closes: &[f64], periods: MacdPeriods) -> Vec<Option<MacdIndicator>> {
    let fast = math::ema_series(closes, periods.fast);
    let slow = math::ema_series(closes, periods.slow);

    let line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal = math::on_defined(&line, |values| math::ema_series(values, periods.signal));

    line.iter()
        .zip(&signal)
        .map(|(macd, signal)| {
            let (macd, signal) = ((*macd)?, (*signal)?);
            Some(MacdIndicator {
                macd,
                signal,
                histogram: macd - signal,
            })
        })
        .collect()
}

/// Calculate MACD for the latest candle
pub fn calculate_macd(candles: &[Candle], periods: MacdPeriods) -> Option<MacdIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    macd_series(&closes, periods).last().copied().flatten()
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, MacdPeriods::default())
}
