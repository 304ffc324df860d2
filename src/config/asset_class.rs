//! Per-asset-class screening presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::indicators::engine::IndicatorParams;
use crate::indicators::structure::{DEFAULT_LEVEL_THRESHOLD, DEFAULT_PIVOT_LOOKBACK};
use crate::models::indicators::StochasticKind;
use crate::signals::conditions::{
    crypto_long_conditions, crypto_short_conditions, equity_long_conditions,
    equity_short_conditions, Condition,
};

use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    CryptoFutures,
    CryptoSpot,
    Equities,
    Options,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::CryptoFutures => "crypto_futures",
            AssetClass::CryptoSpot => "crypto_spot",
            AssetClass::Equities => "equities",
            AssetClass::Options => "options",
        }
    }

    pub fn is_crypto(&self) -> bool {
        matches!(self, AssetClass::CryptoFutures | AssetClass::CryptoSpot)
    }

    pub fn default_watchlist(&self) -> Vec<String> {
        let symbols: &[&str] = match self {
            AssetClass::CryptoFutures => &[
                "BTC/USDT", "ETH/USDT", "SOL/USDT", "DOGE/USDT", "AVAX/USDT", "XRP/USDT",
                "PEPE/USDT", "WIF/USDT", "INJ/USDT", "ARB/USDT", "FET/USDT", "OP/USDT",
            ],
            AssetClass::CryptoSpot => &[
                "BTC/USD", "ETH/USD", "SOL/USD", "AVAX/USD", "DOGE/USD", "SHIB/USD", "XRP/USD",
                "ADA/USD", "ARB/USD", "INJ/USD", "TIA/USD", "OP/USD", "FET/USD", "PEPE/USD",
                "APT/USD", "WIF/USD",
            ],
            AssetClass::Equities => &[
                "AAPL", "TSLA", "NVDA", "AMZN", "SPY", "MSFT", "META", "GOOGL", "NFLX", "AMD",
                "INTC", "BABA", "QQQ", "IWM", "SOFI", "PLTR", "ROKU", "F", "GM", "PINS", "DKNG",
                "CHPT", "NIO", "RIOT", "MARA", "CVNA", "UPST", "LCID", "AFRM", "T", "PFE", "BBD",
                "DNA",
            ],
            AssetClass::Options => &[
                "AAPL", "TSLA", "NVDA", "AMZN", "SPY", "MSFT", "META", "GOOGL", "NFLX", "AMD",
                "INTC", "BABA", "QQQ", "IWM", "LCID", "F", "SOFI", "NIO", "PLTR", "UPST", "AMC",
                "SNDL", "SIRI", "RBLX", "PFE", "DNA", "RIOT", "MARA", "FCEL", "SBLK", "RCL",
                "UAL", "CCL", "FUBO", "CLNE", "VYGR", "VGZ",
            ],
        };
        symbols.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crypto_futures" | "futures" => Ok(AssetClass::CryptoFutures),
            "crypto_spot" | "spot" | "crypto" => Ok(AssetClass::CryptoSpot),
            "equities" | "equity" | "stocks" => Ok(AssetClass::Equities),
            "options" | "option" => Ok(AssetClass::Options),
            other => Err(ConfigError::Invalid {
                key: "ASSET_CLASS",
                value: other.to_string(),
            }),
        }
    }
}

/// Everything that differs between the four screening variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetClassConfig {
    pub asset_class: AssetClass,
    pub indicators: IndicatorParams,
    pub long_conditions: Vec<Condition>,
    pub short_conditions: Vec<Condition>,
    /// Minimum satisfied conditions for a directional signal.
    pub threshold: usize,
    /// Latest-candle volume below this suppresses any signal.
    pub volume_floor: f64,
    /// Maximum age in calendar days of the latest candle, if checked.
    pub freshness_tolerance_days: Option<i64>,
    pub timeframe: String,
    pub candle_limit: usize,
    /// Whether swing levels and stop/target are derived.
    pub detect_levels: bool,
    pub pivot_lookback: usize,
    pub level_threshold: f64,
    /// Options only: skip the symbol when no contract qualifies.
    pub require_contract: bool,
}

impl AssetClassConfig {
    pub fn for_asset_class(asset_class: AssetClass) -> Self {
        match asset_class {
            AssetClass::CryptoFutures | AssetClass::CryptoSpot => Self::crypto(asset_class),
            AssetClass::Equities | AssetClass::Options => Self::equity(asset_class),
        }
    }

    pub fn crypto_futures() -> Self {
        Self::crypto(AssetClass::CryptoFutures)
    }

    pub fn crypto_spot() -> Self {
        Self::crypto(AssetClass::CryptoSpot)
    }

    pub fn equities() -> Self {
        Self::equity(AssetClass::Equities)
    }

    pub fn options() -> Self {
        Self::equity(AssetClass::Options)
    }

    fn crypto(asset_class: AssetClass) -> Self {
        Self {
            asset_class,
            indicators: IndicatorParams::with_stochastic(StochasticKind::StochRsi),
            long_conditions: crypto_long_conditions(),
            short_conditions: crypto_short_conditions(),
            threshold: 3,
            volume_floor: 10.0,
            freshness_tolerance_days: None,
            timeframe: "1h".to_string(),
            candle_limit: 200,
            detect_levels: false,
            pivot_lookback: DEFAULT_PIVOT_LOOKBACK,
            level_threshold: DEFAULT_LEVEL_THRESHOLD,
            require_contract: false,
        }
    }

    fn equity(asset_class: AssetClass) -> Self {
        Self {
            asset_class,
            indicators: IndicatorParams::with_stochastic(StochasticKind::Classic),
            long_conditions: equity_long_conditions(),
            short_conditions: equity_short_conditions(),
            threshold: 2,
            volume_floor: 500_000.0,
            freshness_tolerance_days: Some(2),
            timeframe: "5m".to_string(),
            candle_limit: 390,
            detect_levels: true,
            pivot_lookback: DEFAULT_PIVOT_LOOKBACK,
            level_threshold: DEFAULT_LEVEL_THRESHOLD,
            require_contract: asset_class == AssetClass::Options,
        }
    }

    pub fn condition_total(&self) -> usize {
        self.long_conditions.len()
    }

    pub fn with_require_contract(mut self, require_contract: bool) -> Self {
        self.require_contract = require_contract;
        self
    }
}
