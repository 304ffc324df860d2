//! Per-symbol processing: fetch, screen, classify and assemble a signal record.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::config::{AssetClass, AssetClassConfig};
use crate::error::SignalError;
use crate::indicators::{detect_support_resistance, IndicatorEngine};
use crate::models::indicators::Candle;
use crate::models::levels::{PivotLevels, TradeParameters};
use crate::models::signal::{ContractDetails, SignalDirection, SignalRecord, SymbolOutcome};
use crate::options::{parse_expiration, select_from_chain};
use crate::services::market_data::MarketDataProvider;
use crate::signals::{SignalEngine, StopLossTakeProfit};

/// Reject series the indicator math cannot be trusted on.
pub fn validate_candles(symbol: &str, candles: &[Candle]) -> Result<(), SignalError> {
    let invalid = |reason: String| SignalError::DataUnavailable {
        symbol: symbol.to_string(),
        reason,
    };

    if candles.is_empty() {
        return Err(invalid("no candles returned".to_string()));
    }

    for (i, candle) in candles.iter().enumerate() {
        let prices = [candle.open, candle.high, candle.low, candle.close];
        if prices.iter().any(|p| !p.is_finite()) {
            return Err(invalid(format!("non-finite price at index {i}")));
        }
        if !candle.volume.is_finite() || candle.volume < 0.0 {
            return Err(invalid(format!("invalid volume {} at index {i}", candle.volume)));
        }
    }

    if let Some(i) = candles
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        return Err(invalid(format!(
            "timestamps not strictly increasing at index {}",
            i + 1
        )));
    }

    Ok(())
}

/// Fail when the latest candle is more than `tolerance_days` calendar days
/// older than `today`.
pub fn check_freshness(
    symbol: &str,
    latest: &Candle,
    today: NaiveDate,
    tolerance_days: i64,
) -> Result<(), SignalError> {
    let last_date = latest.timestamp.date_naive();
    let age_days = (today - last_date).num_days();
    if age_days > tolerance_days {
        return Err(SignalError::StaleData {
            symbol: symbol.to_string(),
            last_date,
            age_days,
            tolerance_days,
        });
    }
    Ok(())
}

/// Runs every screening step for one symbol against a single asset-class
/// profile.
pub struct SymbolProcessor {
    provider: Arc<dyn MarketDataProvider>,
    config: AssetClassConfig,
    engine: IndicatorEngine,
    today: Option<NaiveDate>,
}

impl SymbolProcessor {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: AssetClassConfig) -> Self {
        let engine = IndicatorEngine::new(config.indicators);
        Self {
            provider,
            config,
            engine,
            today: None,
        }
    }

    /// Pin the calendar date used by the freshness check.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &AssetClassConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub async fn process(&self, symbol: &str) -> Result<SymbolOutcome, SignalError> {
        let config = &self.config;

        let candles = self
            .provider
            .get_candles(symbol, &config.timeframe, config.candle_limit)
            .await
            .map_err(|e| SignalError::from_provider(symbol, e))?;
        validate_candles(symbol, &candles)?;

        let Some(last) = candles.last() else {
            return Err(SignalError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "no candles returned".to_string(),
            });
        };

        if !SignalEngine::passes_volume_floor(last, config) {
            return Err(SignalError::LowVolume {
                symbol: symbol.to_string(),
                volume: last.volume,
                floor: config.volume_floor,
            });
        }

        if let Some(tolerance_days) = config.freshness_tolerance_days {
            check_freshness(symbol, last, self.today(), tolerance_days)?;
        }

        let Some(latest) = self.engine.latest(&candles) else {
            return Err(SignalError::InsufficientHistory {
                symbol: symbol.to_string(),
                available: candles.len(),
                required: self.engine.params().required_history(),
            });
        };

        let classification = SignalEngine::classify(&latest, config);
        let signal = classification.signal;
        if !signal.is_actionable() {
            debug!(symbol = %symbol, "SymbolProcessor: no signal for {}", symbol);
            return Ok(SymbolOutcome::NoSignal);
        }

        let mut spot_price = latest.candle.close;
        let mut funding_rate = None;
        let mut contract = None;

        match config.asset_class {
            AssetClass::Options => {
                let chain = self
                    .provider
                    .get_option_chain(symbol)
                    .await
                    .map_err(|e| SignalError::from_provider(symbol, e))?
                    .ok_or_else(|| SignalError::DataUnavailable {
                        symbol: symbol.to_string(),
                        reason: "no option chain available".to_string(),
                    })?;
                spot_price = chain.spot_price;

                match select_from_chain(&chain, signal.direction) {
                    Some(selected) => {
                        contract = Some(ContractDetails {
                            contract_symbol: selected.contract_symbol.clone(),
                            strike: selected.strike,
                            premium: selected.premium,
                            volume: selected.volume,
                            expiration: parse_expiration(&selected.contract_symbol)
                                .or(chain.expiration),
                            last_trade_date: selected.last_trade_date.map(|t| t.date_naive()),
                        });
                    }
                    None if config.require_contract => {
                        return Err(SignalError::NoQualifyingContract {
                            symbol: symbol.to_string(),
                            direction: signal.direction,
                        });
                    }
                    None => {
                        debug!(symbol = %symbol, "SymbolProcessor: no qualifying contract, recording without one");
                    }
                }
            }
            AssetClass::CryptoFutures => {
                funding_rate = match self.provider.get_funding_rate(symbol).await {
                    Ok(rate) => rate,
                    Err(e) => {
                        warn!(symbol = %symbol, error = %e, "SymbolProcessor: funding rate unavailable");
                        None
                    }
                };
            }
            AssetClass::CryptoSpot | AssetClass::Equities => {}
        }

        let (levels, trade) = if config.detect_levels {
            let levels =
                detect_support_resistance(&candles, config.pivot_lookback, config.level_threshold);
            let trade = StopLossTakeProfit::from_levels(signal.direction, &levels, spot_price);
            (levels, trade)
        } else {
            (PivotLevels::default(), TradeParameters::default())
        };

        let record = SignalRecord {
            symbol: symbol.to_string(),
            asset_class: config.asset_class,
            direction: signal.direction,
            spot_price,
            close: latest.candle.close,
            volume: latest.candle.volume,
            indicators: latest.indicators,
            score: signal.score,
            condition_total: signal.condition_total,
            conditions: classification.conditions,
            nearest_support: levels.nearest_support(spot_price),
            nearest_resistance: levels.nearest_resistance(spot_price),
            stop: trade.stop,
            target: trade.target,
            funding_rate,
            contract,
            timestamp: latest.candle.timestamp,
        };

        info!(
            symbol = %symbol,
            direction = ?record.direction,
            score = record.score,
            total = record.condition_total,
            "SymbolProcessor: {} signal for {}",
            direction_name(record.direction),
            symbol
        );

        Ok(SymbolOutcome::Signal(Box::new(record)))
    }
}

fn direction_name(direction: SignalDirection) -> &'static str {
    match direction {
        SignalDirection::Long => "LONG",
        SignalDirection::Short => "SHORT",
        SignalDirection::None => "NONE",
    }
}
