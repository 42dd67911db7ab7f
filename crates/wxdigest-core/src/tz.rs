//! Fixed-offset civil time utilities.
//!
//! The target region observes no daylight saving time, so civil dates and
//! hours are computed against a constant UTC offset rather than a timezone
//! database. This is a narrowing assumption: it is only correct for zones
//! whose offset never changes.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Timelike, Utc};

use crate::error::{Result, WxDigestError};

/// Default target offset in minutes east of UTC (UTC-03:00).
pub const DEFAULT_OFFSET_MINUTES: i32 = -3 * 60;

/// The default target offset (UTC-03:00).
pub fn default_offset() -> FixedOffset {
    // -10800 seconds is always within chrono's accepted range.
    FixedOffset::east_opt(DEFAULT_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

/// Build a fixed offset from minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| WxDigestError::InvalidOffset(format!("{} minutes is out of range", minutes)))
}

/// Parse a fixed UTC offset.
///
/// Accepts `Z`/`UTC`, `±HH:MM`, `±HHMM` and `±HH`.
///
/// # Examples
///
/// ```
/// use wxdigest_core::tz::parse_offset;
///
/// let offset = parse_offset("-03:00").unwrap();
/// assert_eq!(offset.local_minus_utc(), -3 * 3600);
/// ```
pub fn parse_offset(input: &str) -> Result<FixedOffset> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return offset_from_minutes(0);
    }

    let invalid = || {
        WxDigestError::InvalidOffset(format!(
            "'{}'. Expected Z, UTC, ±HH:MM, ±HHMM or ±HH",
            input
        ))
    };

    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
        4 => (
            digits[..2].parse::<i32>().map_err(|_| invalid())?,
            digits[2..].parse::<i32>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    offset_from_minutes(sign * (hours * 60 + minutes))
}

/// Convert a UTC instant to civil time at the given offset.
pub fn to_civil(utc: DateTime<Utc>, offset: FixedOffset) -> DateTime<FixedOffset> {
    offset.from_utc_datetime(&utc.naive_utc())
}

/// Civil calendar date of a UTC instant.
pub fn civil_date(utc: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    to_civil(utc, offset).date_naive()
}

/// Civil hour of day (0-23) of a UTC instant.
pub fn civil_hour(utc: DateTime<Utc>, offset: FixedOffset) -> u32 {
    to_civil(utc, offset).hour()
}

/// Civil dates of "today" and "tomorrow" relative to a reference instant.
pub fn today_and_tomorrow(now: DateTime<Utc>, offset: FixedOffset) -> (NaiveDate, NaiveDate) {
    let today = civil_date(now, offset);
    (today, today + chrono::Duration::days(1))
}

/// Format a datetime as RFC3339 with timezone offset.
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}
