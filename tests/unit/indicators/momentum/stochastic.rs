//! Unit tests for Stochastic and Stochastic-RSI

use signalscope::indicators::momentum::{
    calculate_stoch_rsi, calculate_stochastic, stochastic_series, StochasticPeriods,
};
use signalscope::models::indicators::Candle;

use crate::test_utils::{base_time, candles_from_closes};

fn closing_at_high(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(
                close - 0.5,
                close,
                close - 1.0,
                close,
                1_000.0,
                base_time() + chrono::Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_stochastic_warm_up() {
    let periods = StochasticPeriods::default();
    assert_eq!(periods.warm_up(), 18);

    let series = stochastic_series(&closing_at_high(18), periods);
    assert!(series[..17].iter().all(Option::is_none));
    assert!(series[17].is_some());
}

#[test]
fn test_stochastic_close_at_high_is_100() {
    let stoch = calculate_stochastic(&closing_at_high(30), StochasticPeriods::default()).unwrap();
    assert_eq!(stoch.k, 100.0);
    assert_eq!(stoch.d, 100.0);
}

#[test]
fn test_stochastic_flat_window_is_50() {
    let candles: Vec<Candle> = (0..30)
        .map(|i| {
            Candle::new(
                100.0,
                100.0,
                100.0,
                100.0,
                1_000.0,
                base_time() + chrono::Duration::hours(i),
            )
        })
        .collect();
    let stoch = calculate_stochastic(&candles, StochasticPeriods::default()).unwrap();
    assert_eq!(stoch.k, 50.0);
    assert_eq!(stoch.d, 50.0);
}

#[test]
fn test_stoch_rsi_constant_rsi_is_50() {
    // Monotonic gains pin RSI at 100, so its window has no range.
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let stoch = calculate_stoch_rsi(&candles_from_closes(&closes), 14, StochasticPeriods::default())
        .unwrap();
    assert_eq!(stoch.k, 50.0);
    assert_eq!(stoch.d, 50.0);
}

#[test]
fn test_stoch_rsi_needs_rsi_warm_up() {
    let closes: Vec<f64> = (0..31).map(|i| 100.0 + (i % 5) as f64).collect();
    let periods = StochasticPeriods::default();
    assert!(calculate_stoch_rsi(&candles_from_closes(&closes), 14, periods).is_none());

    let closes: Vec<f64> = (0..32).map(|i| 100.0 + (i % 5) as f64).collect();
    assert!(calculate_stoch_rsi(&candles_from_closes(&closes), 14, periods).is_some());
}
