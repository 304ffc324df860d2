//! Unit tests for scan schedule construction

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use cron::Schedule;
use signalscope::core::cron_expression;

/// Gaps in seconds between the first `count` ticks after a fixed instant.
fn tick_gaps(interval: u64, count: usize) -> Vec<i64> {
    let schedule = Schedule::from_str(&cron_expression(interval).unwrap()).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 1).unwrap();
    let ticks: Vec<_> = schedule.after(&after).take(count).collect();
    ticks
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_seconds())
        .collect()
}

#[test]
fn test_sub_minute_interval_uses_seconds() {
    assert_eq!(cron_expression(30).unwrap(), "*/30 * * * * *");
}

#[test]
fn test_minute_interval_uses_minutes() {
    assert_eq!(cron_expression(60).unwrap(), "0 */1 * * * *");
    assert_eq!(cron_expression(300).unwrap(), "0 */5 * * * *");
}

#[test]
fn test_hour_interval_uses_hours() {
    assert_eq!(cron_expression(3600).unwrap(), "0 0 */1 * * *");
    assert_eq!(cron_expression(7200).unwrap(), "0 0 */2 * * *");
    assert_eq!(cron_expression(86_400).unwrap(), "0 0 0 * * *");
}

#[test]
fn test_zero_interval_is_invalid() {
    assert!(cron_expression(0).is_err());
}

#[test]
fn test_uneven_intervals_are_invalid() {
    for interval in [45, 90, 7 * 60, 5400, 5 * 3600, 2 * 86_400] {
        assert!(cron_expression(interval).is_err(), "{interval}s should be rejected");
    }
}

#[test]
fn test_ticks_are_evenly_spaced() {
    for interval in [15, 30, 60, 900, 3600, 7200, 21_600, 86_400] {
        let gaps = tick_gaps(interval, 6);
        assert!(
            gaps.iter().all(|&gap| gap == interval as i64),
            "{interval}s produced gaps {gaps:?}"
        );
    }
}
