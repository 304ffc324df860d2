//! Technical indicators and the engine that assembles them per candle.

pub mod engine;
pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use engine::{IndicatorEngine, IndicatorParams};
pub use structure::{detect_support_resistance, filter_levels};
