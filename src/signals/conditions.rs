//! Named boolean conditions evaluated against the latest enriched candle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::indicators::EnrichedCandle;
use crate::models::signal::ConditionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Close,
    Rsi,
    MacdHistogram,
    Ema,
    Atr,
    BollingerLower,
    BollingerUpper,
    StochK,
    StochD,
}

impl Operand {
    pub fn value(self, latest: &EnrichedCandle) -> f64 {
        let ind = &latest.indicators;
        match self {
            Operand::Close => latest.candle.close,
            Operand::Rsi => ind.rsi,
            Operand::MacdHistogram => ind.macd.histogram,
            Operand::Ema => ind.ema_50,
            Operand::Atr => ind.atr,
            Operand::BollingerLower => ind.bollinger.lower,
            Operand::BollingerUpper => ind.bollinger.upper,
            Operand::StochK => ind.stochastic.k,
            Operand::StochD => ind.stochastic.d,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::Close => "close",
            Operand::Rsi => "RSI",
            Operand::MacdHistogram => "MACD hist",
            Operand::Ema => "EMA50",
            Operand::Atr => "ATR",
            Operand::BollingerLower => "BB lower",
            Operand::BollingerUpper => "BB upper",
            Operand::StochK => "%K",
            Operand::StochD => "%D",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    /// Plain IEEE comparison; no tolerance is applied.
    pub fn apply(self, left: f64, right: f64) -> bool {
        match self {
            Comparison::GreaterThan => left > right,
            Comparison::LessThan => left < right,
            Comparison::GreaterEqual => left >= right,
            Comparison::LessEqual => left <= right,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
            Comparison::GreaterEqual => ">=",
            Comparison::LessEqual => "<=",
        }
    }
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    Value(f64),
    Operand { operand: Operand, factor: f64 },
}

impl Reference {
    fn resolve(&self, latest: &EnrichedCandle) -> f64 {
        match *self {
            Reference::Value(value) => value,
            Reference::Operand { operand, factor } => operand.value(latest) * factor,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Value(value) => write!(f, "{value}"),
            Reference::Operand { operand, factor } if *factor == 1.0 => write!(f, "{operand}"),
            Reference::Operand { operand, factor } => write!(f, "{operand} x {factor}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub left: Operand,
    pub comparison: Comparison,
    pub right: Reference,
}

impl Condition {
    pub fn new(left: Operand, comparison: Comparison, right: Reference) -> Self {
        let name = format!("{} {} {}", left, comparison.symbol(), right);
        Self {
            name,
            left,
            comparison,
            right,
        }
    }

    pub fn threshold(left: Operand, comparison: Comparison, value: f64) -> Self {
        Self::new(left, comparison, Reference::Value(value))
    }

    pub fn against(left: Operand, comparison: Comparison, operand: Operand) -> Self {
        Self::scaled(left, comparison, operand, 1.0)
    }

    pub fn scaled(left: Operand, comparison: Comparison, operand: Operand, factor: f64) -> Self {
        Self::new(left, comparison, Reference::Operand { operand, factor })
    }

    pub fn evaluate(&self, latest: &EnrichedCandle) -> bool {
        self.comparison
            .apply(self.left.value(latest), self.right.resolve(latest))
    }
}

/// Evaluate every condition, returning the satisfied count and the breakdown.
pub fn score_conditions(
    conditions: &[Condition],
    latest: &EnrichedCandle,
) -> (usize, Vec<ConditionResult>) {
    let results: Vec<ConditionResult> = conditions
        .iter()
        .map(|condition| ConditionResult {
            name: condition.name.clone(),
            satisfied: condition.evaluate(latest),
        })
        .collect();
    let score = results.iter().filter(|r| r.satisfied).count();
    (score, results)
}

/// Crypto long set (6): oversold RSI, rising momentum, above trend, %K over
/// %D, below the lower band, non-zero volatility.
pub fn crypto_long_conditions() -> Vec<Condition> {
    use Comparison::*;
    vec![
        Condition::threshold(Operand::Rsi, LessThan, 40.0),
        Condition::threshold(Operand::MacdHistogram, GreaterThan, 0.0),
        Condition::against(Operand::Close, GreaterThan, Operand::Ema),
        Condition::against(Operand::StochK, GreaterThan, Operand::StochD),
        Condition::against(Operand::Close, LessThan, Operand::BollingerLower),
        Condition::threshold(Operand::Atr, GreaterThan, 0.0),
    ]
}

pub fn crypto_short_conditions() -> Vec<Condition> {
    use Comparison::*;
    vec![
        Condition::threshold(Operand::Rsi, GreaterThan, 60.0),
        Condition::threshold(Operand::MacdHistogram, LessThan, 0.0),
        Condition::against(Operand::Close, LessThan, Operand::Ema),
        Condition::against(Operand::StochK, LessThan, Operand::StochD),
        Condition::against(Operand::Close, GreaterThan, Operand::BollingerUpper),
        Condition::threshold(Operand::Atr, GreaterThan, 0.0),
    ]
}

/// Equity/option long set (5). The 1.02 band factor is an intentional buffer.
pub fn equity_long_conditions() -> Vec<Condition> {
    use Comparison::*;
    vec![
        Condition::threshold(Operand::Rsi, LessThan, 40.0),
        Condition::threshold(Operand::MacdHistogram, GreaterEqual, 0.0),
        Condition::against(Operand::Close, GreaterEqual, Operand::Ema),
        Condition::scaled(Operand::Close, LessEqual, Operand::BollingerLower, 1.02),
        Condition::threshold(Operand::StochK, LessThan, 30.0),
    ]
}

pub fn equity_short_conditions() -> Vec<Condition> {
    use Comparison::*;
    vec![
        Condition::threshold(Operand::Rsi, GreaterThan, 60.0),
        Condition::threshold(Operand::MacdHistogram, LessEqual, 0.0),
        Condition::against(Operand::Close, LessEqual, Operand::Ema),
        Condition::scaled(Operand::Close, GreaterEqual, Operand::BollingerUpper, 0.98),
        Condition::threshold(Operand::StochK, GreaterThan, 70.0),
    ]
}
