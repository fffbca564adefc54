//! Congestion multipliers, applied to mean and scale together so that the
//! gamma shape (and hence the coefficient of variation) is unchanged.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Rush-hour factor by local hour.
pub fn time_of_day(local: &NaiveDateTime) -> f64 {
    match local.hour() {
        5..=8 => 1.3,
        15..=18 => 1.2,
        10..=13 | 21..=23 => 0.7,
        _ => 1.0,
    }
}

/// Weekday and seasonal factors, composed multiplicatively.
pub fn day_and_season(local: &NaiveDateTime) -> f64 {
    let mut multiplier = 1.0;
    match local.weekday() {
        Weekday::Fri | Weekday::Sun => multiplier *= 1.15,
        Weekday::Tue | Weekday::Wed => multiplier *= 0.85,
        _ => {}
    }
    if matches!(local.month(), 6 | 7 | 8 | 11 | 12) {
        multiplier *= 1.1;
    }
    multiplier
}

pub fn congestion(local: &NaiveDateTime) -> f64 {
    time_of_day(local) * day_and_season(local)
}
