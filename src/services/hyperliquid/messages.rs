//! Hyperliquid `/info` request and response payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InfoRequest {
    CandleSnapshot {
        req: CandleSnapshotRequest,
    },
    #[serde(rename_all = "camelCase")]
    FundingHistory {
        coin: String,
        start_time: i64,
    },
}

impl InfoRequest {
    pub fn candle_snapshot(coin: &str, interval: &str, start_time: i64, end_time: i64) -> Self {
        InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: coin.to_string(),
                interval: interval.to_string(),
                start_time,
                end_time,
            },
        }
    }

    pub fn funding_history(coin: &str, start_time: i64) -> Self {
        InfoRequest::FundingHistory {
            coin: coin.to_string(),
            start_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleSnapshotRequest {
    pub coin: String,
    pub interval: String,
    pub start_time: i64,
    pub end_time: i64,
}

/// One candle as returned by `candleSnapshot`; prices are decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CandleSnapshot {
    #[serde(rename = "t")]
    pub start_time: i64,
    #[serde(rename = "T")]
    pub end_time: i64,
    #[serde(rename = "s")]
    pub coin: String,
    #[serde(rename = "i")]
    pub interval: String,
    #[serde(rename = "o")]
    pub open: String,
    #[serde(rename = "h")]
    pub high: String,
    #[serde(rename = "l")]
    pub low: String,
    #[serde(rename = "c")]
    pub close: String,
    #[serde(rename = "v")]
    pub volume: String,
    #[serde(rename = "n", default)]
    pub trades: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingEntry {
    pub coin: String,
    pub funding_rate: String,
    #[serde(default)]
    pub premium: Option<String>,
    pub time: i64,
}
