//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod levels;
pub mod options;
pub mod signal;

pub use indicators::{
    AtrIndicator, BollingerBandsIndicator, Candle, EmaIndicator, EnrichedCandle, IndicatorSet,
    MacdIndicator, RsiIndicator, StochasticIndicator, StochasticKind,
};
pub use levels::{PivotLevels, TradeParameters};
pub use options::{OptionChain, OptionContract};
pub use signal::{
    ConditionResult, ContractDetails, Signal, SignalDirection, SignalRecord, SymbolOutcome,
};
