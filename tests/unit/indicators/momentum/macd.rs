//! Unit tests for MACD indicator

use signalscope::indicators::momentum::{calculate_macd_default, macd_series, MacdPeriods};

use crate::test_utils::candles_from_closes;

#[test]
fn test_macd_warm_up() {
    let periods = MacdPeriods::default();
    assert_eq!(periods.warm_up(), 34);

    let closes: Vec<f64> = (0..34).map(|i| 100.0 + i as f64).collect();
    let series = macd_series(&closes, periods);
    assert!(series[..33].iter().all(Option::is_none));
    assert!(series[33].is_some());
}

#[test]
fn test_macd_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 33]);
    assert!(calculate_macd_default(&candles).is_none());
}

#[test]
fn test_macd_flat_prices_are_zero() {
    let macd = calculate_macd_default(&candles_from_closes(&[100.0; 60])).unwrap();
    assert!(macd.macd.abs() < 1e-9);
    assert!(macd.signal.abs() < 1e-9);
    assert!(macd.histogram.abs() < 1e-9);
}

#[test]
fn test_macd_linear_trend_has_constant_line() {
    // SMA-seeded EMAs of a straight line lag by slope * (n - 1) / 2.
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + 0.5 * i as f64).collect();
    let macd = calculate_macd_default(&candles_from_closes(&closes)).unwrap();
    assert!((macd.macd - 3.5).abs() < 1e-6, "macd = {}", macd.macd);
    assert!(macd.histogram.abs() < 1e-6);
}

#[test]
fn test_macd_accelerating_trend_has_positive_histogram() {
    let closes: Vec<f64> = (0..200).map(|i| 100.0 + 0.01 * (i * i) as f64).collect();
    let macd = calculate_macd_default(&candles_from_closes(&closes)).unwrap();
    assert!(macd.histogram > 0.0);
    assert!((macd.histogram - macd.macd + macd.signal).abs() < 1e-9);
}
