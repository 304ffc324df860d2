//! Sequential watchlist pass with per-symbol isolation

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::pipeline::SymbolProcessor;
use crate::error::SignalError;
use crate::models::signal::{SignalRecord, SymbolOutcome};
use crate::services::alerts::{format_alert, AlertSink};

/// Counters for one pass over the watchlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub signals: usize,
    pub skipped: usize,
    pub errors: usize,
    pub delivery_failures: usize,
}

pub struct WatchlistRunner {
    processor: SymbolProcessor,
    sink: Arc<dyn AlertSink>,
    watchlist: Vec<String>,
}

impl WatchlistRunner {
    pub fn new(processor: SymbolProcessor, sink: Arc<dyn AlertSink>, watchlist: Vec<String>) -> Self {
        Self {
            processor,
            sink,
            watchlist,
        }
    }

    pub fn watchlist(&self) -> &[String] {
        &self.watchlist
    }

    /// Process every symbol in order. Failures are logged and counted; they
    /// never stop the pass.
    pub async fn run_once(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        info!(
            asset_class = %self.processor.config().asset_class,
            symbol_count = self.watchlist.len(),
            "WatchlistRunner: starting pass over {} symbols",
            self.watchlist.len()
        );

        for symbol in &self.watchlist {
            summary.processed += 1;

            match self.processor.process(symbol).await {
                Ok(SymbolOutcome::NoSignal) => {}
                Ok(SymbolOutcome::Signal(record)) => {
                    summary.signals += 1;
                    if let Err(e) = self.deliver(&record).await {
                        summary.delivery_failures += 1;
                        error!(symbol = %symbol, error = %e, "WatchlistRunner: failed to deliver alert for {}", symbol);
                    }
                }
                Err(e) if e.is_skip() => {
                    summary.skipped += 1;
                    debug!(symbol = %symbol, reason = %e, "WatchlistRunner: skipped {}", symbol);
                }
                Err(e) => {
                    summary.errors += 1;
                    warn!(symbol = %symbol, error = %e, "WatchlistRunner: error processing {}", symbol);
                }
            }
        }

        info!(
            processed = summary.processed,
            signals = summary.signals,
            skipped = summary.skipped,
            errors = summary.errors,
            delivery_failures = summary.delivery_failures,
            "WatchlistRunner: pass complete"
        );
        summary
    }

    async fn deliver(&self, record: &SignalRecord) -> Result<(), SignalError> {
        let message = format_alert(record);
        self.sink.send(&message).await?;
        Ok(())
    }
}
