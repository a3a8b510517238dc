//! Timestamp and calendar-date helpers.
//!
//! # Time Model
//! All layout math runs on naive wall-clock time (`NaiveDateTime`).
//! Timestamps carrying an explicit offset (`Z`, `+07:00`) are normalized
//! to UTC; timestamps without one are taken as-is. Calendar dates are
//! read from the text before the first `T`, so an offset never moves a
//! record to a neighbouring day.

use chrono::{
    DateTime, Datelike, DurationRound, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday,
};

/// Epoch milliseconds of 2000-01-01T00:00:00Z.
///
/// Source data uses zero/epoch sentinels for "not scheduled"; only
/// timestamps strictly after this instant are considered real.
pub const VALID_AFTER_MS: i64 = 946_684_800_000;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601-ish timestamp.
///
/// Accepts RFC 3339 (offset normalized to UTC), offset-less date-times
/// with `T` or space separators, and bare dates (midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// The date component of an ISO string: everything before the first `T`.
#[inline]
pub fn date_key(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw).trim()
}

/// Parses the calendar date of an ISO string, ignoring any time component.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_key(raw), "%Y-%m-%d").ok()
}

/// Whether a timestamp is past the sentinel floor.
#[inline]
pub fn is_valid_timestamp(t: NaiveDateTime, valid_after_ms: i64) -> bool {
    t.and_utc().timestamp_millis() > valid_after_ms
}

/// Midnight of the day containing `t`.
#[inline]
pub fn start_of_day(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

/// `t` truncated to the whole hour.
pub fn start_of_hour(t: NaiveDateTime) -> NaiveDateTime {
    t.duration_trunc(TimeDelta::hours(1)).unwrap_or(t)
}

/// Signed minutes from `from` to `to` (fractional).
#[inline]
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}

/// Weekday number with 0 = Sunday … 6 = Saturday.
#[inline]
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

#[inline]
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// `YYYY-MM` bucket key.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
