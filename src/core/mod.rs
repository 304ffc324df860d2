//! Core orchestration: per-symbol pipeline, watchlist runner and scheduler

pub mod pipeline;
pub mod runtime;
pub mod scheduler;

pub use pipeline::{check_freshness, validate_candles, SymbolProcessor};
pub use runtime::{RunSummary, WatchlistRunner};
pub use scheduler::{cron_expression, ScanScheduler};
