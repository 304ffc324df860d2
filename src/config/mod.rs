//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by the binary via `dotenvy`.

mod asset_class;

pub use asset_class::{AssetClass, AssetClassConfig};

use std::env;

use thiserror::Error;

pub const DEFAULT_HYPERLIQUID_API_URL: &str = "https://api.hyperliquid.xyz";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Deployment environment name (`APP_ENV`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub environment: String,
    pub profile: AssetClassConfig,
    pub watchlist: Vec<String>,
    /// Seconds between watchlist passes; 0 runs a single pass.
    pub scan_interval_seconds: u64,
    pub discord_webhook_url: Option<String>,
    pub hyperliquid_api_url: String,
}

impl ScannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let asset_class = match get("ASSET_CLASS") {
            Some(value) => value.parse::<AssetClass>()?,
            None => AssetClass::CryptoFutures,
        };
        let mut profile = AssetClassConfig::for_asset_class(asset_class);

        if let Some(timeframe) = get("TIMEFRAME") {
            profile.timeframe = timeframe;
        }
        if let Some(limit) = parse_opt::<usize>(&get, "CANDLE_LIMIT")? {
            profile.candle_limit = limit;
        }
        if let Some(lookback) = parse_opt::<usize>(&get, "PIVOT_LOOKBACK")? {
            profile.pivot_lookback = lookback;
        }
        if let Some(require) = parse_opt::<bool>(&get, "REQUIRE_CONTRACT")? {
            profile.require_contract = require;
        }

        let watchlist = match get("WATCHLIST") {
            Some(list) => list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => asset_class.default_watchlist(),
        };

        Ok(Self {
            environment: get("APP_ENV").unwrap_or_else(|| "sandbox".to_string()),
            profile,
            watchlist,
            scan_interval_seconds: parse_opt::<u64>(&get, "SCAN_INTERVAL_SECONDS")?.unwrap_or(0),
            discord_webhook_url: get("DISCORD_WEBHOOK_URL"),
            hyperliquid_api_url: get("HYPERLIQUID_API_URL")
                .unwrap_or_else(|| DEFAULT_HYPERLIQUID_API_URL.to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn parse_opt<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    get(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}
