//! Unit tests for ATR indicator

use signalscope::indicators::volatility::{atr_series, calculate_atr, calculate_atr_default};

use crate::test_utils::{assert_close, candles_from_ranges};

#[test]
fn test_atr_needs_period_plus_one_candles() {
    let candles = candles_from_ranges(&[(102.0, 100.0); 14]);
    assert!(calculate_atr_default(&candles).is_none());

    let candles = candles_from_ranges(&[(102.0, 100.0); 15]);
    assert!(calculate_atr_default(&candles).is_some());
}

#[test]
fn test_atr_constant_range() {
    let candles = candles_from_ranges(&[(102.0, 100.0); 40]);
    let atr = calculate_atr(&candles, 14).unwrap();
    assert_close(atr.value, 2.0);
    assert_eq!(atr.period, 14);
}

#[test]
fn test_atr_first_candle_has_no_true_range() {
    let candles = candles_from_ranges(&[(102.0, 100.0), (104.0, 101.0), (103.0, 99.0)]);
    let series = atr_series(&candles, 2);
    assert_eq!(series[..2], [None, None]);
    // TR: max(3, 3, 0) = 3 and max(4, 0.5, 3.5) = 4
    assert_close(series[2].unwrap(), 3.5);
}
