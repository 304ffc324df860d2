//! Stop-loss and target derivation from swing levels

use crate::models::levels::{PivotLevels, TradeParameters};
use crate::models::signal::SignalDirection;

pub struct StopLossTakeProfit;

impl StopLossTakeProfit {
    /// Long stops sit 2% under the nearest support.
    pub const LONG_STOP_FACTOR: f64 = 0.98;
    /// Short stops sit 2% over the nearest resistance.
    pub const SHORT_STOP_FACTOR: f64 = 1.02;

    /// Derive stop/target from the nearest levels around spot. Each side is
    /// independent: a missing level only leaves its own field empty.
    pub fn calculate(
        direction: SignalDirection,
        nearest_support: Option<f64>,
        nearest_resistance: Option<f64>,
    ) -> TradeParameters {
        match direction {
            SignalDirection::Long => TradeParameters {
                stop: nearest_support.map(|s| s * Self::LONG_STOP_FACTOR),
                target: nearest_resistance,
            },
            SignalDirection::Short => TradeParameters {
                stop: nearest_resistance.map(|r| r * Self::SHORT_STOP_FACTOR),
                target: nearest_support,
            },
            SignalDirection::None => TradeParameters::default(),
        }
    }

    pub fn from_levels(direction: SignalDirection, levels: &PivotLevels, spot: f64) -> TradeParameters {
        Self::calculate(
            direction,
            levels.nearest_support(spot),
            levels.nearest_resistance(spot),
        )
    }
}
