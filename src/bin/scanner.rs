//! Signalscope Scanner
//!
//! Screens the configured watchlist once, or on a cron schedule when
//! SCAN_INTERVAL_SECONDS is set, and posts alerts for every signal.

use dotenvy::dotenv;
use signalscope::config::ScannerConfig;
use signalscope::core::{ScanScheduler, SymbolProcessor, WatchlistRunner};
use signalscope::logging;
use signalscope::services::alerts::{AlertSink, DiscordWebhookSink, LogAlertSink};
use signalscope::services::hyperliquid::HyperliquidMarketDataProvider;
use signalscope::services::market_data::MarketDataProvider;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ScannerConfig::from_env()?;
    let asset_class = config.profile.asset_class;

    info!("Starting Signalscope Scanner");
    info!(environment = %config.environment, "Environment");
    info!(
        asset_class = %asset_class,
        timeframe = %config.profile.timeframe,
        symbols = ?config.watchlist,
        "Watchlist: {}",
        config.watchlist.join(", ")
    );

    if !asset_class.is_crypto() {
        return Err(format!("no market data provider available for {}", asset_class).into());
    }

    let provider: Arc<dyn MarketDataProvider> = Arc::new(
        HyperliquidMarketDataProvider::with_base_url(config.hyperliquid_api_url.clone()),
    );

    let sink: Arc<dyn AlertSink> = match &config.discord_webhook_url {
        Some(url) => Arc::new(DiscordWebhookSink::new(url.clone())),
        None => {
            warn!("DISCORD_WEBHOOK_URL not set, alerts will only be logged");
            Arc::new(LogAlertSink)
        }
    };

    let processor = SymbolProcessor::new(provider, config.profile.clone());
    let runner = Arc::new(WatchlistRunner::new(processor, sink, config.watchlist.clone()));

    if config.scan_interval_seconds == 0 {
        let summary = runner.run_once().await;
        info!(summary = ?summary, "Scanner finished single pass");
        return Ok(());
    }

    let scheduler = ScanScheduler::new(runner, config.scan_interval_seconds)?;
    scheduler.start().await;

    info!("Scanner started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down scanner...");
    scheduler.stop().await;
    info!("Scanner stopped");

    Ok(())
}
