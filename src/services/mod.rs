//! External collaborators: market data and alert delivery.

pub mod alerts;
pub mod hyperliquid;
pub mod market_data;

pub use alerts::{AlertError, AlertSink, DiscordWebhookSink, LogAlertSink};
pub use market_data::{MarketDataProvider, ProviderError, StaticMarketDataProvider};
