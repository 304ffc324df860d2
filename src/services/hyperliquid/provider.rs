//! Hyperliquid market data provider implementation

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use super::client::HyperliquidRestClient;
use super::messages::CandleSnapshot;
use crate::config::DEFAULT_HYPERLIQUID_API_URL;
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataProvider, ProviderError};

/// Window of funding history requested when looking up the latest rate.
const FUNDING_LOOKBACK_HOURS: i64 = 24;

pub struct HyperliquidMarketDataProvider {
    client: HyperliquidRestClient,
}

impl HyperliquidMarketDataProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_HYPERLIQUID_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: HyperliquidRestClient::new(base_url),
        }
    }

    pub fn with_client(client: HyperliquidRestClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HyperliquidRestClient {
        &self.client
    }
}

impl Default for HyperliquidMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a watchlist pair (`BTC/USDT`, `ETH-PERP`) to a Hyperliquid coin name.
pub fn coin_for_symbol(symbol: &str) -> String {
    symbol
        .split(['/', '-', ':'])
        .next()
        .unwrap_or(symbol)
        .trim()
        .to_uppercase()
}

/// Candle interval length in milliseconds (`1m`, `15m`, `1h`, `1d`, `1w`, `1M`).
pub fn interval_millis(interval: &str) -> Option<i64> {
    let split = interval.find(|c: char| !c.is_ascii_digit())?;
    let (count, unit) = interval.split_at(split);
    let count: i64 = count.parse().ok().filter(|n| *n > 0)?;
    let unit_ms = match unit {
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        "w" => 7 * 86_400_000,
        "M" => 30 * 86_400_000,
        _ => return None,
    };
    count.checked_mul(unit_ms)
}

fn parse_price(field: &'static str, raw: &str) -> Result<f64, ProviderError> {
    raw.parse::<f64>()
        .map_err(|e| ProviderError::Parse(format!("invalid {field} {raw:?}: {e}")))
}

fn to_candle(snapshot: &CandleSnapshot) -> Result<Candle, ProviderError> {
    let open = parse_price("open", &snapshot.open)?;
    let high = parse_price("high", &snapshot.high)?;
    let low = parse_price("low", &snapshot.low)?;
    let close = parse_price("close", &snapshot.close)?;
    let volume = parse_price("volume", &snapshot.volume)?;

    // Candles are stamped with their open time so the series stays strictly increasing.
    let timestamp = DateTime::from_timestamp_millis(snapshot.start_time).ok_or_else(|| {
        ProviderError::Parse(format!("invalid candle time {}", snapshot.start_time))
    })?;

    Ok(Candle::new(open, high, low, close, volume, timestamp))
}

#[async_trait]
impl MarketDataProvider for HyperliquidMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        let coin = coin_for_symbol(symbol);
        let step = interval_millis(timeframe)
            .ok_or_else(|| ProviderError::Parse(format!("unknown timeframe {timeframe:?}")))?;

        let end_time = Utc::now().timestamp_millis();
        let start_time = i64::try_from(limit)
            .ok()
            .and_then(|limit| step.checked_mul(limit))
            .and_then(|window| end_time.checked_sub(window))
            .ok_or_else(|| ProviderError::Parse(format!("candle limit {limit} out of range")))?;

        let snapshots = self
            .client
            .candle_snapshot(&coin, timeframe, start_time, end_time)
            .await?;
        if snapshots.is_empty() {
            return Err(ProviderError::NotFound(symbol.to_string()));
        }

        let mut candles = snapshots
            .iter()
            .map(to_candle)
            .collect::<Result<Vec<_>, _>>()?;
        candles.sort_by_key(|c| c.timestamp);
        candles.dedup_by_key(|c| c.timestamp);

        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }

        debug!(
            symbol = %symbol,
            coin = %coin,
            count = candles.len(),
            "HyperliquidMarketDataProvider: fetched candles"
        );
        Ok(candles)
    }

    async fn get_funding_rate(&self, symbol: &str) -> Result<Option<f64>, ProviderError> {
        let coin = coin_for_symbol(symbol);
        let start_time = (Utc::now() - Duration::hours(FUNDING_LOOKBACK_HOURS)).timestamp_millis();

        let history = self.client.funding_history(&coin, start_time).await?;
        let Some(latest) = history.iter().max_by_key(|entry| entry.time) else {
            warn!(symbol = %symbol, "HyperliquidMarketDataProvider: empty funding history");
            return Ok(None);
        };

        parse_price("funding rate", &latest.funding_rate).map(Some)
    }
}
