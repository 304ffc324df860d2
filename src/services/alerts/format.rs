//! Discord markdown rendering of signal records.

use std::fmt::Write;

use crate::config::AssetClass;
use crate::models::signal::{ContractDetails, SignalDirection, SignalRecord};

const NOT_DETECTED: &str = "_Not detected in recent range_";

/// Render a signal record as a Discord message in the layout of its asset class.
pub fn format_alert(record: &SignalRecord) -> String {
    match record.asset_class {
        AssetClass::CryptoFutures => format_futures(record),
        AssetClass::CryptoSpot => format_spot(record),
        AssetClass::Equities | AssetClass::Options => format_equity(record),
    }
}

fn direction_label(direction: SignalDirection, long_label: &'static str) -> &'static str {
    match direction {
        SignalDirection::Long => long_label,
        SignalDirection::Short => "SHORT",
        SignalDirection::None => "NO",
    }
}

fn format_futures(record: &SignalRecord) -> String {
    let ind = &record.indicators;
    let funding = record
        .funding_rate
        .map(|rate| format!("{:.4}%", rate * 100.0))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "📊 **{} SIGNAL (Futures)** for `{}`\n\
         > Price: **${:.4}**\n\
         > RSI: {:.2}, MACD Hist: {:.2}\n\
         > StochRSI: K={:.2}, D={:.2}\n\
         > EMA50: {:.2}, ATR: {:.2}\n\
         > 📉 BB Bands: [{:.2} - {:.2}]\n\
         > 🔍 Confidence Score: `{}/{}`\n\
         > ⏱ Funding Rate: `{}`\n\
         > Time: {}",
        direction_label(record.direction, "LONG"),
        record.symbol,
        record.close,
        ind.rsi,
        ind.macd.histogram,
        ind.stochastic.k,
        ind.stochastic.d,
        ind.ema_50,
        ind.atr,
        ind.bollinger.lower,
        ind.bollinger.upper,
        record.score,
        record.condition_total,
        funding,
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
    )
}

fn format_spot(record: &SignalRecord) -> String {
    let ind = &record.indicators;
    let (header, band) = match record.direction {
        SignalDirection::Short => (
            "⚠️ **SHORT SIGNAL**",
            format!("Bollinger Upper Band: {:.2}", ind.bollinger.upper),
        ),
        _ => (
            "🚨 **BUY SIGNAL**",
            format!("Bollinger Lower Band: {:.2}", ind.bollinger.lower),
        ),
    };

    format!(
        "{header} for `{}`\n\
         > Price: **${:.4}**\n\
         > RSI: {:.2}, MACD Hist: {:.2}\n\
         > StochRSI: K={:.2}, D={:.2}\n\
         > ATR: {:.2}, EMA50: {:.2}\n\
         > {band}\n\
         > 🔍 Confidence Score: {}/{}\n\
         > Time: {}",
        record.symbol,
        record.close,
        ind.rsi,
        ind.macd.histogram,
        ind.stochastic.k,
        ind.stochastic.d,
        ind.atr,
        ind.ema_50,
        record.score,
        record.condition_total,
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
    )
}

fn format_equity(record: &SignalRecord) -> String {
    let ind = &record.indicators;
    let mut msg = format!(
        "📢 **{} SIGNAL** for `{}`\n> Spot Price: **${:.2}**",
        direction_label(record.direction, "BUY"),
        record.symbol,
        record.spot_price,
    );

    if let Some(contract) = &record.contract {
        push_contract(&mut msg, contract);
    }

    let _ = write!(
        msg,
        "\n> RSI: {:.2}, MACD Hist: {:.2}, Stoch %K: {:.2}\n> Confidence Score: `{}/{}`",
        ind.rsi, ind.macd.histogram, ind.stochastic.k, record.score, record.condition_total,
    );

    match record.nearest_support {
        Some(support) => {
            let _ = write!(msg, "\n> 📉 Support: **${support:.2}**");
        }
        None => {
            let _ = write!(msg, "\n> 📉 Support: {NOT_DETECTED}");
        }
    }
    match record.nearest_resistance {
        Some(resistance) => {
            let _ = write!(msg, "\n> 📈 Resistance: **${resistance:.2}**");
        }
        None => {
            let _ = write!(msg, "\n> 📈 Resistance: {NOT_DETECTED}");
        }
    }

    if record.asset_class == AssetClass::Options {
        push_suggested_trade(&mut msg, record);
        let _ = write!(msg, "\n> Signal Time: {}", record.timestamp.format("%Y-%m-%d"));
    } else {
        match (record.stop, record.target) {
            (Some(stop), Some(target)) => {
                let _ = write!(msg, "\n> 🛑 Stop: **${stop:.2}**, 🎯 Target: **${target:.2}**");
            }
            _ => msg.push_str(
                "\n> 🚫 Stop/Target not available due to lack of clear support/resistance",
            ),
        }
        let _ = write!(
            msg,
            "\n> 🕒 Signal Time: {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }
    msg
}

/// Options alerts report each side of the trade separately.
fn push_suggested_trade(msg: &mut String, record: &SignalRecord) {
    match (record.stop, record.target) {
        (Some(stop), Some(target)) => {
            let _ = write!(
                msg,
                "\n> 🛑 Suggested Stop: **${stop:.2}**\n> 🎯 Suggested Target: **${target:.2}**"
            );
        }
        (None, Some(target)) => {
            let _ = write!(
                msg,
                "\n> 🎯 Suggested Target: **${target:.2}**, 🛑 Stop: _Not available_"
            );
        }
        (Some(stop), None) => {
            let _ = write!(
                msg,
                "\n> 🛑 Suggested Stop: **${stop:.2}**, 🎯 Target: _Not available_"
            );
        }
        (None, None) => {
            msg.push_str("\n> 🚫 Stop & Target: _Not available due to lack of support/resistance_");
        }
    }
}

fn push_contract(msg: &mut String, contract: &ContractDetails) {
    let date_or_unknown = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };

    let _ = write!(
        msg,
        "\n> Option: `{}`\n\
         > Strike: **${:.2}**, Premium: **${:.2}**, Volume: `{:.0}`\n\
         > 🗓️ Expiration: **{}**, Last traded on: **{}**",
        contract.contract_symbol,
        contract.strike,
        contract.premium,
        contract.volume,
        date_or_unknown(contract.expiration),
        date_or_unknown(contract.last_trade_date),
    );
}
