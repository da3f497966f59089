//! Shared date parsing and formatting helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a stored deadline string.
///
/// Accepts `YYYY-MM-DD` (interpreted as midnight) and
/// `YYYY-MM-DDTHH:MM`. Naive values are treated as UTC throughout the
/// crate. Anything else yields `None`.
pub fn parse_deadline(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Fractional days from `now` until a deadline string, negative when the
/// deadline has passed. `None` when the string does not parse.
pub fn days_until(deadline: &str, now: DateTime<Utc>) -> Option<f64> {
    let dt = parse_deadline(deadline)?;
    Some((dt - now.naive_utc()).num_seconds() as f64 / SECONDS_PER_DAY)
}

/// Fractional days elapsed since `instant`.
pub fn days_since(instant: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - instant).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Whole days elapsed since `instant`, rounded down.
pub fn days_old(instant: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    days_since(instant, now).floor() as i64
}

/// Short human-readable timestamp, e.g. `Mar 15, 9:00 AM`.
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %-d, %-I:%M %p").to_string()
}
