//! Unit tests for swing support/resistance detection

use signalscope::indicators::structure::{
    detect_support_resistance, detect_support_resistance_default, filter_levels,
};

use crate::test_utils::candles_from_ranges;

fn flat_ranges(count: usize) -> Vec<(f64, f64)> {
    vec![(110.0, 100.0); count]
}

#[test]
fn test_isolated_low_is_support() {
    let mut ranges = flat_ranges(121);
    ranges[60] = (105.0, 90.0);
    let levels = detect_support_resistance_default(&candles_from_ranges(&ranges));
    assert_eq!(levels.support, vec![90.0]);
    assert!(levels.resistance.is_empty());
}

#[test]
fn test_isolated_high_is_resistance() {
    let mut ranges = flat_ranges(121);
    ranges[60] = (125.0, 104.0);
    let levels = detect_support_resistance_default(&candles_from_ranges(&ranges));
    assert_eq!(levels.resistance, vec![125.0]);
    assert!(levels.support.is_empty());
}

#[test]
fn test_equal_neighbour_is_not_a_pivot() {
    let mut ranges = flat_ranges(121);
    ranges[60] = (105.0, 90.0);
    ranges[100] = (105.0, 90.0);
    let levels = detect_support_resistance_default(&candles_from_ranges(&ranges));
    assert!(levels.support.is_empty());
}

#[test]
fn test_pivot_at_series_edge_is_ignored() {
    let mut ranges = flat_ranges(121);
    ranges[10] = (105.0, 80.0);
    let levels = detect_support_resistance_default(&candles_from_ranges(&ranges));
    assert!(levels.support.is_empty());
}

#[test]
fn test_short_series_yields_no_levels() {
    let mut ranges = flat_ranges(120);
    ranges[60] = (105.0, 90.0);
    let levels = detect_support_resistance_default(&candles_from_ranges(&ranges));
    assert!(levels.support.is_empty());
    assert!(levels.resistance.is_empty());
}

#[test]
fn test_nearby_pivots_are_merged() {
    let mut ranges = flat_ranges(41);
    ranges[10] = (105.0, 90.0);
    ranges[30] = (105.0, 91.0);
    let levels = detect_support_resistance(&candles_from_ranges(&ranges), 5, 0.02);
    assert_eq!(levels.support, vec![90.0]);
}

#[test]
fn test_filter_levels_keeps_earliest_and_sorts() {
    assert_eq!(
        filter_levels(&[100.0, 101.0, 105.0, 99.0], 0.02),
        vec![100.0, 105.0]
    );
    assert_eq!(filter_levels(&[101.0, 100.0], 0.02), vec![101.0]);
    assert_eq!(filter_levels(&[120.0, 100.0], 0.02), vec![100.0, 120.0]);
    assert!(filter_levels(&[], 0.02).is_empty());
}
