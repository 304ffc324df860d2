use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AssetClass;
use crate::models::indicators::IndicatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Long,
    Short,
    None,
}

/// Directional classification with its confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub direction: SignalDirection,
    /// Number of satisfied conditions.
    pub score: usize,
    /// Size of the condition list the score was counted against.
    pub condition_total: usize,
}

impl Signal {
    pub fn none(condition_total: usize) -> Self {
        Self {
            direction: SignalDirection::None,
            score: 0,
            condition_total,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.direction != SignalDirection::None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub name: String,
    pub satisfied: bool,
}

/// Option contract attached to an options-variant signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDetails {
    pub contract_symbol: String,
    pub strike: f64,
    pub premium: f64,
    pub volume: f64,
    pub expiration: Option<NaiveDate>,
    pub last_trade_date: Option<NaiveDate>,
}

/// Structured result for one symbol that produced a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub direction: SignalDirection,
    pub spot_price: f64,
    pub close: f64,
    pub volume: f64,
    pub indicators: IndicatorSet,
    pub score: usize,
    pub condition_total: usize,
    pub conditions: Vec<ConditionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_support: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_resistance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractDetails>,
    pub timestamp: DateTime<Utc>,
}

/// What processing one symbol produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    NoSignal,
    Signal(Box<SignalRecord>),
}
