//! Input parsing and validation.
//!
//! Raw responses are checked here before any bucketing happens, so a
//! malformed payload is reported as an error instead of looking like a
//! short forecast further down the pipeline.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::condition::Condition;
use crate::error::{Result, WxDigestError};
use crate::models::{DayNight, ForecastSample, RawForecastEntry, RawForecastResponse};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse an upstream civil timestamp, interpreted as UTC.
///
/// The API sends timestamps like `2026-10-17 12:00:00` with no offset;
/// they are always UTC.
///
/// # Examples
///
/// ```
/// use wxdigest_core::parse::parse_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let dt = parse_timestamp("2026-10-17 12:00:00").unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap());
/// ```
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let civil = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    let naive = TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(civil, fmt).ok())
        .ok_or_else(|| {
            WxDigestError::InputMalformed(format!(
                "Invalid timestamp: '{}'. Expected YYYY-MM-DD HH:MM:SS",
                input
            ))
        })?;

    // Any fixed offset shifts by less than a day; the shifted civil time must exist.
    let margin = Duration::days(1);
    if naive.checked_sub_signed(margin).is_none() || naive.checked_add_signed(margin).is_none() {
        return Err(WxDigestError::InputMalformed(format!(
            "Timestamp out of range: '{}'",
            input
        )));
    }

    Ok(naive.and_utc())
}

/// Parse a raw forecast response from JSON text.
pub fn parse_response(json: &str) -> Result<RawForecastResponse> {
    serde_json::from_str(json)
        .map_err(|e| WxDigestError::InputMalformed(format!("Invalid forecast response: {}", e)))
}

/// Validate every entry of a response and convert it into samples.
///
/// Fails on the first bad entry; there is no partial result.
pub fn validate_response(response: &RawForecastResponse) -> Result<Vec<ForecastSample>> {
    if response.list.is_empty() {
        return Err(WxDigestError::InputMalformed(
            "Forecast list is empty".to_string(),
        ));
    }

    response
        .list
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            to_sample(entry).map_err(|e| match e {
                WxDigestError::InputMalformed(msg) => {
                    WxDigestError::InputMalformed(format!("entry {}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect()
}

/// Validate and convert a single entry.
pub fn to_sample(entry: &RawForecastEntry) -> Result<ForecastSample> {
    let at = parse_timestamp(&entry.dt_txt)?;

    let code = entry
        .weather
        .first()
        .map(|w| w.id)
        .ok_or_else(|| WxDigestError::InputMalformed("weather list is empty".to_string()))?;

    let temps = [
        ("main.temp", entry.main.temp),
        ("main.temp_max", entry.main.temp_max),
        ("main.temp_min", entry.main.temp_min),
    ];
    for (field, value) in temps {
        if !value.is_finite() {
            return Err(WxDigestError::InputMalformed(format!(
                "{} is not a finite number",
                field
            )));
        }
    }

    if !(0.0..=1.0).contains(&entry.pop) {
        return Err(WxDigestError::InputMalformed(format!(
            "pop {} is outside [0, 1]",
            entry.pop
        )));
    }

    Ok(ForecastSample {
        at,
        temp: entry.main.temp,
        temp_max: entry.main.temp_max,
        temp_min: entry.main.temp_min,
        condition: Condition::from_code(code),
        day_night: DayNight::from_pod(&entry.sys.pod),
        pop: entry.pop,
    })
}
