use serde::{Deserialize, Serialize};

/// Deduplicated swing levels, each pool sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl PivotLevels {
    /// Highest support strictly below `spot`.
    pub fn nearest_support(&self, spot: f64) -> Option<f64> {
        self.support
            .iter()
            .copied()
            .filter(|&level| level < spot)
            .reduce(f64::max)
    }

    /// Lowest resistance strictly above `spot`.
    pub fn nearest_resistance(&self, spot: f64) -> Option<f64> {
        self.resistance
            .iter()
            .copied()
            .filter(|&level| level > spot)
            .reduce(f64::min)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeParameters {
    pub stop: Option<f64>,
    pub target: Option<f64>,
}
