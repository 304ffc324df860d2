//! Indicator engine: attaches a complete indicator set to every candle past
//! the warm-up region.

use serde::{Deserialize, Serialize};

use crate::indicators::momentum::{
    macd_series, rsi_series, stoch_rsi_series, stochastic_series, MacdPeriods,
    StochasticPeriods,
};
use crate::indicators::trend::ema_series;
use crate::indicators::volatility::{atr_series, bollinger_series};
use crate::models::indicators::{
    Candle, EnrichedCandle, IndicatorSet, StochasticIndicator, StochasticKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub rsi_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub ema_period: u32,
    pub atr_period: u32,
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
    pub stochastic: StochasticKind,
    pub stochastic_length: u32,
    pub stochastic_k: u32,
    pub stochastic_d: u32,
}

impl IndicatorParams {
    pub fn with_stochastic(stochastic: StochasticKind) -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            ema_period: 50,
            atr_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            stochastic,
            stochastic_length: 14,
            stochastic_k: 3,
            stochastic_d: 3,
        }
    }

    fn macd_periods(&self) -> MacdPeriods {
        MacdPeriods {
            fast: self.macd_fast as usize,
            slow: self.macd_slow as usize,
            signal: self.macd_signal as usize,
        }
    }

    fn stochastic_periods(&self) -> StochasticPeriods {
        StochasticPeriods {
            length: self.stochastic_length as usize,
            k_smoothing: self.stochastic_k as usize,
            d_smoothing: self.stochastic_d as usize,
        }
    }

    /// Length of the longest warm-up window: the minimum number of candles
    /// for which at least one fully defined indicator set exists.
    pub fn required_history(&self) -> usize {
        let stochastic = match self.stochastic {
            StochasticKind::StochRsi => {
                self.rsi_period as usize + self.stochastic_periods().warm_up()
            }
            StochasticKind::Classic => self.stochastic_periods().warm_up(),
        };
        [
            self.rsi_period as usize + 1,
            self.macd_periods().warm_up(),
            self.ema_period as usize,
            self.atr_period as usize + 1,
            self.bollinger_period as usize,
            stochastic,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self::with_stochastic(StochasticKind::StochRsi)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute indicators over `candles` (oldest first).
    ///
    /// Candles without a fully defined indicator set are dropped, so the
    /// result is empty when the input is shorter than
    /// [`IndicatorParams::required_history`].
    pub fn compute(&self, candles: &[Candle]) -> Vec<EnrichedCandle> {
        if candles.is_empty() || candles.len() < self.params.required_history() {
            return Vec::new();
        }

        let p = &self.params;
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let rsi = rsi_series(&closes, p.rsi_period as usize);
        let macd = macd_series(&closes, p.macd_periods());
        let ema = ema_series(candles, p.ema_period);
        let atr = atr_series(candles, p.atr_period);
        let bollinger = bollinger_series(candles, p.bollinger_period, p.bollinger_std_dev);
        let stochastic: Vec<Option<StochasticIndicator>> = match p.stochastic {
            StochasticKind::StochRsi => {
                stoch_rsi_series(&closes, p.rsi_period as usize, p.stochastic_periods())
            }
            StochasticKind::Classic => stochastic_series(candles, p.stochastic_periods()),
        };

        candles
            .iter()
            .enumerate()
            .filter_map(|(i, candle)| {
                let indicators = IndicatorSet {
                    rsi: rsi[i]?,
                    macd: macd[i]?,
                    ema_50: ema[i]?,
                    atr: atr[i]?,
                    bollinger: bollinger[i]?,
                    stochastic: stochastic[i]?,
                };
                Some(EnrichedCandle {
                    candle: *candle,
                    indicators,
                })
            })
            .collect()
    }

    /// Indicator set of the most recent candle, if one is defined.
    pub fn latest(&self, candles: &[Candle]) -> Option<EnrichedCandle> {
        self.compute(candles).pop()
    }
}
