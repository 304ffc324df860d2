use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub contract_symbol: String,
    pub strike: f64,
    /// Last traded price.
    pub premium: f64,
    pub volume: f64,
    pub in_the_money: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trade_date: Option<DateTime<Utc>>,
}

/// Calls and puts for the nearest expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
    pub spot_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<NaiveDate>,
}
