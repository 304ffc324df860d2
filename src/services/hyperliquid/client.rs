//! Thin REST client for the Hyperliquid info endpoint

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::messages::{CandleSnapshot, FundingEntry, InfoRequest};
use crate::services::market_data::ProviderError;

#[derive(Debug, Clone)]
pub struct HyperliquidRestClient {
    http: Client,
    base_url: String,
}

impl HyperliquidRestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn candle_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Vec<CandleSnapshot>, ProviderError> {
        self.info(&InfoRequest::candle_snapshot(coin, interval, start_time, end_time))
            .await
    }

    pub async fn funding_history(
        &self,
        coin: &str,
        start_time: i64,
    ) -> Result<Vec<FundingEntry>, ProviderError> {
        self.info(&InfoRequest::funding_history(coin, start_time)).await
    }

    async fn info<T: DeserializeOwned>(&self, request: &InfoRequest) -> Result<T, ProviderError> {
        let url = format!("{}/info", self.base_url);
        debug!(url = %url, request = ?request, "HyperliquidRestClient: POST /info");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }
}
