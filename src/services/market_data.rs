//! Market data provider interface.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::indicators::Candle;
use crate::models::options::OptionChain;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("no data for {0}")]
    NotFound(String),

    #[error("{0} is not supported by this provider")]
    Unsupported(&'static str),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Historical candles for `symbol`, oldest first, at most `limit`.
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError>;

    /// Calls/puts and spot for the nearest expiration.
    async fn get_option_chain(&self, _symbol: &str) -> Result<Option<OptionChain>, ProviderError> {
        Err(ProviderError::Unsupported("option chains"))
    }

    /// Latest perpetual funding rate, when the venue has one.
    async fn get_funding_rate(&self, _symbol: &str) -> Result<Option<f64>, ProviderError> {
        Ok(None)
    }
}

/// In-memory provider serving fixed data; unknown symbols yield `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    candles: HashMap<String, Vec<Candle>>,
    option_chains: HashMap<String, OptionChain>,
    funding_rates: HashMap<String, f64>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candles(mut self, symbol: impl Into<String>, candles: Vec<Candle>) -> Self {
        self.candles.insert(symbol.into(), candles);
        self
    }

    pub fn with_option_chain(mut self, symbol: impl Into<String>, chain: OptionChain) -> Self {
        self.option_chains.insert(symbol.into(), chain);
        self
    }

    pub fn with_funding_rate(mut self, symbol: impl Into<String>, rate: f64) -> Self {
        self.funding_rates.insert(symbol.into(), rate);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        _timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        let candles = self
            .candles
            .get(symbol)
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))?;
        let start = candles.len().saturating_sub(limit);
        Ok(candles[start..].to_vec())
    }

    async fn get_option_chain(&self, symbol: &str) -> Result<Option<OptionChain>, ProviderError> {
        Ok(self.option_chains.get(symbol).cloned())
    }

    async fn get_funding_rate(&self, symbol: &str) -> Result<Option<f64>, ProviderError> {
        Ok(self.funding_rates.get(symbol).copied())
    }
}
