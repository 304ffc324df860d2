//! Per-symbol error taxonomy.
//!
//! Every variant is recoverable at the symbol boundary: the watchlist runner
//! logs it and moves on to the next symbol.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::signal::SignalDirection;
use crate::services::alerts::AlertError;
use crate::services::market_data::ProviderError;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("insufficient history for {symbol}: {available} candles, {required} required")]
    InsufficientHistory {
        symbol: String,
        available: usize,
        required: usize,
    },

    #[error("low volume for {symbol}: {volume} < {floor}")]
    LowVolume {
        symbol: String,
        volume: f64,
        floor: f64,
    },

    #[error("stale data for {symbol}: last candle on {last_date} is {age_days} days old (tolerance {tolerance_days})")]
    StaleData {
        symbol: String,
        last_date: NaiveDate,
        age_days: i64,
        tolerance_days: i64,
    },

    #[error("no qualifying {direction:?} contract for {symbol}")]
    NoQualifyingContract {
        symbol: String,
        direction: SignalDirection,
    },

    #[error("alert delivery failed: {0}")]
    DeliveryFailure(#[from] AlertError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SignalError {
    /// Wrap a provider failure as missing data for `symbol`.
    pub fn from_provider(symbol: &str, err: ProviderError) -> Self {
        SignalError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: err.to_string(),
        }
    }

    /// Skips are expected outcomes of screening (thin volume, warm-up, no
    /// contract) as opposed to data or delivery problems.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            SignalError::InsufficientHistory { .. }
                | SignalError::LowVolume { .. }
                | SignalError::NoQualifyingContract { .. }
        )
    }
}
