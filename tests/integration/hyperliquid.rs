//! Hyperliquid REST provider against a mocked info endpoint

use signalscope::services::hyperliquid::{HyperliquidMarketDataProvider, HyperliquidRestClient};
use signalscope::services::market_data::{MarketDataProvider, ProviderError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn snapshot(t: i64, close: &str) -> serde_json::Value {
    serde_json::json!({
        "t": t,
        "T": t + 3_599_999,
        "s": "BTC",
        "i": "1h",
        "o": "100.5",
        "h": "110",
        "l": "90.25",
        "c": close,
        "v": "12.5",
        "n": 42
    })
}

async fn mock_candles(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/info"))
        .and(body_string_contains("candleSnapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn provider_for(server: &MockServer) -> HyperliquidMarketDataProvider {
    HyperliquidMarketDataProvider::with_client(HyperliquidRestClient::with_client(
        server.uri(),
        reqwest::Client::new(),
    ))
}

#[tokio::test]
async fn candles_are_parsed_sorted_and_limited() {
    let server = MockServer::start().await;
    mock_candles(
        &server,
        serde_json::json!([
            snapshot(7_200_000, "103"),
            snapshot(0, "101"),
            snapshot(3_600_000, "102"),
        ]),
    )
    .await;

    let candles = provider_for(&server)
        .get_candles("BTC/USDT", "1h", 2)
        .await
        .expect("candles");

    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].close, 102.0);
    assert_eq!(candles[1].close, 103.0);
    assert_eq!(candles[1].open, 100.5);
    assert_eq!(candles[1].high, 110.0);
    assert_eq!(candles[1].low, 90.25);
    assert_eq!(candles[1].volume, 12.5);
    assert_eq!(candles[1].timestamp.timestamp_millis(), 7_200_000);
}

#[tokio::test]
async fn request_uses_mapped_coin_and_interval() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .and(body_string_contains("\"coin\":\"ETH\""))
        .and(body_string_contains("\"interval\":\"15m\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([snapshot(0, "1")])))
        .expect(1)
        .mount(&server)
        .await;

    let candles = provider_for(&server)
        .get_candles("ETH/USDT", "15m", 10)
        .await
        .expect("candles");
    assert_eq!(candles.len(), 1);
}

#[tokio::test]
async fn empty_snapshot_is_not_found() {
    let server = MockServer::start().await;
    mock_candles(&server, serde_json::json!([])).await;

    let err = provider_for(&server)
        .get_candles("BTC/USDT", "1h", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound(ref symbol) if symbol == "BTC/USDT"));
}

#[tokio::test]
async fn malformed_price_is_a_parse_error() {
    let server = MockServer::start().await;
    mock_candles(&server, serde_json::json!([snapshot(0, "abc")])).await;

    let err = provider_for(&server)
        .get_candles("BTC/USDT", "1h", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .get_candles("BTC/USDT", "1h", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 500, ref body } if body == "boom"));
}

#[tokio::test]
async fn unknown_timeframe_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .get_candles("BTC/USDT", "fortnight", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn oversized_limit_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .get_candles("BTC/USDT", "1M", usize::MAX / 2)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Parse(ref msg) if msg.contains("out of range")));
}

#[tokio::test]
async fn funding_rate_takes_latest_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .and(body_string_contains("fundingHistory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"coin": "BTC", "fundingRate": "0.0000125", "premium": "0.0001", "time": 2},
            {"coin": "BTC", "fundingRate": "0.0001", "premium": "0.0002", "time": 1}
        ])))
        .mount(&server)
        .await;

    let rate = provider_for(&server)
        .get_funding_rate("BTC/USDT")
        .await
        .expect("funding rate");
    assert_eq!(rate, Some(0.0000125));
}

#[tokio::test]
async fn empty_funding_history_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/info"))
        .and(body_string_contains("fundingHistory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let rate = provider_for(&server).get_funding_rate("BTC").await.unwrap();
    assert_eq!(rate, None);
}

#[tokio::test]
async fn option_chains_are_unsupported() {
    let server = MockServer::start().await;
    let err = provider_for(&server)
        .get_option_chain("BTC")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Unsupported(_)));
}
