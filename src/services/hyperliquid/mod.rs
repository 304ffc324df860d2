//! Hyperliquid REST market data

pub mod client;
pub mod messages;
pub mod provider;

pub use client::HyperliquidRestClient;
pub use provider::{coin_for_symbol, interval_millis, HyperliquidMarketDataProvider};
