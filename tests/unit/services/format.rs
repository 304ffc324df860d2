//! Unit tests for alert formatting

use chrono::{NaiveDate, TimeZone, Utc};
use signalscope::config::AssetClass;
use signalscope::models::signal::{ContractDetails, SignalDirection, SignalRecord};
use signalscope::services::alerts::format_alert;

use crate::test_utils::Snapshot;

fn record(asset_class: AssetClass, direction: SignalDirection) -> SignalRecord {
    let latest = Snapshot {
        close: 95.0,
        rsi: 35.0,
        histogram: 0.5,
        ema: 90.0,
        atr: 1.2,
        bb_lower: 96.0,
        bb_upper: 110.0,
        k: 60.0,
        d: 50.0,
        ..Default::default()
    }
    .build();

    SignalRecord {
        symbol: "BTC/USDT".to_string(),
        asset_class,
        direction,
        spot_price: 95.0,
        close: 95.0,
        volume: 1_000.0,
        indicators: latest.indicators,
        score: 6,
        condition_total: 6,
        conditions: Vec::new(),
        nearest_support: None,
        nearest_resistance: None,
        stop: None,
        target: None,
        funding_rate: None,
        contract: None,
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap(),
    }
}

#[test]
fn test_futures_alert() {
    let mut rec = record(AssetClass::CryptoFutures, SignalDirection::Long);
    rec.funding_rate = Some(0.0001);
    let msg = format_alert(&rec);

    assert!(msg.starts_with("📊 **LONG SIGNAL (Futures)** for `BTC/USDT`\n"));
    assert!(msg.contains("> Price: **$95.0000**"));
    assert!(msg.contains("> RSI: 35.00, MACD Hist: 0.50"));
    assert!(msg.contains("> StochRSI: K=60.00, D=50.00"));
    assert!(msg.contains("> 📉 BB Bands: [96.00 - 110.00]"));
    assert!(msg.contains("> 🔍 Confidence Score: `6/6`"));
    assert!(msg.contains("> ⏱ Funding Rate: `0.0100%`"));
    assert!(msg.ends_with("> Time: 2024-03-01 14:00:00"));
}

#[test]
fn test_futures_alert_without_funding() {
    let msg = format_alert(&record(AssetClass::CryptoFutures, SignalDirection::Short));
    assert!(msg.starts_with("📊 **SHORT SIGNAL (Futures)**"));
    assert!(msg.contains("Funding Rate: `N/A`"));
}

#[test]
fn test_spot_alerts_show_relevant_band() {
    let buy = format_alert(&record(AssetClass::CryptoSpot, SignalDirection::Long));
    assert!(buy.starts_with("🚨 **BUY SIGNAL** for `BTC/USDT`"));
    assert!(buy.contains("> Bollinger Lower Band: 96.00"));
    assert!(buy.contains("> 🔍 Confidence Score: 6/6"));

    let short = format_alert(&record(AssetClass::CryptoSpot, SignalDirection::Short));
    assert!(short.starts_with("⚠️ **SHORT SIGNAL** for `BTC/USDT`"));
    assert!(short.contains("> Bollinger Upper Band: 110.00"));
}

#[test]
fn test_equity_alert_with_levels() {
    let mut rec = record(AssetClass::Equities, SignalDirection::Long);
    rec.symbol = "AAPL".to_string();
    rec.score = 3;
    rec.condition_total = 5;
    rec.nearest_support = Some(100.0);
    rec.nearest_resistance = Some(110.0);
    rec.stop = Some(98.0);
    rec.target = Some(110.0);
    let msg = format_alert(&rec);

    assert!(msg.starts_with("📢 **BUY SIGNAL** for `AAPL`\n> Spot Price: **$95.00**"));
    assert!(msg.contains("> Confidence Score: `3/5`"));
    assert!(msg.contains("> 📉 Support: **$100.00**"));
    assert!(msg.contains("> 📈 Resistance: **$110.00**"));
    assert!(msg.contains("> 🛑 Stop: **$98.00**, 🎯 Target: **$110.00**"));
    assert!(msg.ends_with("> 🕒 Signal Time: 2024-03-01 14:00:00"));
}

#[test]
fn test_equity_alert_missing_levels() {
    let msg = format_alert(&record(AssetClass::Equities, SignalDirection::Short));
    assert!(msg.starts_with("📢 **SHORT SIGNAL**"));
    assert!(msg.contains("> 📉 Support: _Not detected in recent range_"));
    assert!(msg.contains("> 📈 Resistance: _Not detected in recent range_"));
    assert!(msg.contains("> 🚫 Stop/Target not available due to lack of clear support/resistance"));
}

#[test]
fn test_equity_alert_needs_both_stop_and_target() {
    let mut rec = record(AssetClass::Equities, SignalDirection::Long);
    rec.target = Some(110.0);
    let msg = format_alert(&rec);
    assert!(msg.contains("> 🚫 Stop/Target not available due to lack of clear support/resistance"));
    assert!(!msg.contains("Suggested"));
}

#[test]
fn test_options_alert_trade_lines() {
    let mut rec = record(AssetClass::Options, SignalDirection::Long);
    rec.stop = Some(98.0);
    rec.target = Some(110.0);
    let msg = format_alert(&rec);
    assert!(msg.contains("> 🛑 Suggested Stop: **$98.00**\n> 🎯 Suggested Target: **$110.00**"));
    assert!(msg.ends_with("> Signal Time: 2024-03-01"));
    assert!(!msg.contains("🕒"));

    rec.stop = None;
    assert!(format_alert(&rec).contains("> 🎯 Suggested Target: **$110.00**, 🛑 Stop: _Not available_"));

    rec.target = None;
    rec.stop = Some(98.0);
    assert!(format_alert(&rec).contains("> 🛑 Suggested Stop: **$98.00**, 🎯 Target: _Not available_"));

    rec.stop = None;
    assert!(format_alert(&rec)
        .contains("> 🚫 Stop & Target: _Not available due to lack of support/resistance_"));
}

#[test]
fn test_options_alert_includes_contract() {
    let mut rec = record(AssetClass::Options, SignalDirection::Long);
    rec.contract = Some(ContractDetails {
        contract_symbol: "AAPL250117C00150000".to_string(),
        strike: 150.0,
        premium: 2.35,
        volume: 1523.0,
        expiration: NaiveDate::from_ymd_opt(2025, 1, 17),
        last_trade_date: NaiveDate::from_ymd_opt(2025, 1, 10),
    });
    let msg = format_alert(&rec);

    assert!(msg.contains("> Option: `AAPL250117C00150000`"));
    assert!(msg.contains("> Strike: **$150.00**, Premium: **$2.35**, Volume: `1523`"));
    assert!(msg.contains("> 🗓️ Expiration: **2025-01-17**, Last traded on: **2025-01-10**"));
}
