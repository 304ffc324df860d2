//! Cron-based scheduler for repeated watchlist passes

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use cron::Schedule;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::runtime::WatchlistRunner;
use crate::config::ConfigError;

/// Cron expression firing every `interval_seconds`.
///
/// Format: second minute hour day month weekday. A `*/N` step restarts at the
/// top of its parent field, so only intervals that divide a minute, an hour or
/// a day evenly keep a constant gap between passes. Anything else is rejected.
pub fn cron_expression(interval_seconds: u64) -> Result<String, ConfigError> {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    let expr = match interval_seconds {
        s if s > 0 && s < MINUTE && MINUTE % s == 0 => format!("*/{s} * * * * *"),
        s if s % MINUTE == 0 && s < HOUR && HOUR % s == 0 => {
            format!("0 */{} * * * *", s / MINUTE)
        }
        s if s % HOUR == 0 && s < DAY && DAY % s == 0 => format!("0 0 */{} * * *", s / HOUR),
        DAY => "0 0 0 * * *".to_string(),
        s => {
            return Err(ConfigError::Invalid {
                key: "SCAN_INTERVAL_SECONDS",
                value: s.to_string(),
            })
        }
    };
    Ok(expr)
}

/// Runs a full watchlist pass on every cron tick. The loop awaits each pass
/// before waiting for the next tick, so passes never overlap.
pub struct ScanScheduler {
    runner: Arc<WatchlistRunner>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    pub fn new(runner: Arc<WatchlistRunner>, interval_seconds: u64) -> Result<Self, ConfigError> {
        let cron_expr = cron_expression(interval_seconds)?;
        let schedule = Schedule::from_str(&cron_expr).map_err(|_| ConfigError::Invalid {
            key: "SCAN_INTERVAL_SECONDS",
            value: interval_seconds.to_string(),
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "ScanScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            runner,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub async fn start(&self) {
        let runner = self.runner.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(Utc).next() else {
                    warn!("ScanScheduler: schedule has no upcoming ticks");
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                };
                let now = Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }

                info!(tick = %next_tick, "ScanScheduler: cron tick");
                runner.run_once().await;
            }
        });

        *self.handle.write().await = Some(handle);
    }

    pub async fn stop(&self) {
        if let Some(h) = self.handle.write().await.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
