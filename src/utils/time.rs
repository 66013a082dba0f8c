//! Wall-clock helpers: ISO-8601 parsing/formatting and second offsets.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeDelta, Utc};

/// Screenshot file names replace the colons of the capture time with underscores.
pub const SCREENSHOT_STAMP_FORMAT: &str = "%Y-%m-%dT%H_%M_%S";

/// Parse a recorder timestamp. RFC 3339 is preferred; a bare
/// `YYYY-MM-DDTHH:MM:SS[.fff]` is read as UTC.
pub fn parse_wall_clock(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `2024-05-01T12:00:00.123Z`
pub fn format_wall_clock(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_screenshot_stamp(stamp: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(stamp, SCREENSHOT_STAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// `later - earlier` in fractional seconds (microsecond resolution).
pub fn seconds_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    let delta = later - earlier;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

/// `base + seconds`, or `None` when the result is not a representable instant.
pub fn offset_by_seconds(base: DateTime<Utc>, seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let micros = (seconds * 1_000_000.0).round();
    if micros.abs() >= i64::MAX as f64 {
        return None;
    }
    base.checked_add_signed(TimeDelta::microseconds(micros as i64))
}
