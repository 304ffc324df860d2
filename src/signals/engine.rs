//! Signal classification over the latest enriched candle.

use tracing::debug;

use crate::config::AssetClassConfig;
use crate::models::indicators::{Candle, EnrichedCandle};
use crate::models::signal::{ConditionResult, Signal, SignalDirection};
use crate::signals::conditions::score_conditions;

/// Signal plus the per-condition breakdown of the emitted direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub signal: Signal,
    pub conditions: Vec<ConditionResult>,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Classify the latest candle.
    ///
    /// The long set is scored first and wins outright when it meets the
    /// threshold; the short set is only scored otherwise. When both sets
    /// would qualify on the same candle the result is therefore LONG.
    pub fn classify(latest: &EnrichedCandle, config: &AssetClassConfig) -> Classification {
        let (long_score, long_results) = score_conditions(&config.long_conditions, latest);
        if long_score >= config.threshold {
            return Classification {
                signal: Signal {
                    direction: SignalDirection::Long,
                    score: long_score,
                    condition_total: config.long_conditions.len(),
                },
                conditions: long_results,
            };
        }

        let (short_score, short_results) = score_conditions(&config.short_conditions, latest);
        if short_score >= config.threshold {
            return Classification {
                signal: Signal {
                    direction: SignalDirection::Short,
                    score: short_score,
                    condition_total: config.short_conditions.len(),
                },
                conditions: short_results,
            };
        }

        debug!(
            long_score,
            short_score,
            threshold = config.threshold,
            "SignalEngine: neither condition set met the threshold"
        );
        Classification {
            signal: Signal::none(config.long_conditions.len()),
            conditions: Vec::new(),
        }
    }

    /// Volume pre-filter, applied before classification.
    pub fn passes_volume_floor(candle: &Candle, config: &AssetClassConfig) -> bool {
        candle.volume >= config.volume_floor
    }

    /// Classify with the volume pre-filter applied: a candle under the floor
    /// never yields a signal, whatever its score.
    pub fn evaluate(latest: &EnrichedCandle, config: &AssetClassConfig) -> Classification {
        if !Self::passes_volume_floor(&latest.candle, config) {
            return Classification {
                signal: Signal::none(config.long_conditions.len()),
                conditions: Vec::new(),
            };
        }
        Self::classify(latest, config)
    }
}
