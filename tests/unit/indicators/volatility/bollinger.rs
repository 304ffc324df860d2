//! Unit tests for Bollinger Bands

use signalscope::indicators::volatility::{
    calculate_bollinger_bands, calculate_bollinger_bands_default,
};

use crate::test_utils::{assert_close, candles_from_closes};

#[test]
fn test_bollinger_uses_population_std_dev() {
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let bands = calculate_bollinger_bands(&candles, 5, 2.0).unwrap();
    assert_close(bands.middle, 3.0);
    assert_close(bands.upper, 3.0 + 2.0 * 2f64.sqrt());
    assert_close(bands.lower, 3.0 - 2.0 * 2f64.sqrt());
}

#[test]
fn test_bollinger_flat_prices_collapse() {
    let bands = calculate_bollinger_bands_default(&candles_from_closes(&[50.0; 25])).unwrap();
    assert_eq!(bands.lower, 50.0);
    assert_eq!(bands.middle, 50.0);
    assert_eq!(bands.upper, 50.0);
}

#[test]
fn test_bollinger_insufficient_data() {
    assert!(calculate_bollinger_bands_default(&candles_from_closes(&[50.0; 19])).is_none());
}
