//! Forecast processing pipeline.
//!
//! Validates a raw response, then derives the current snapshot, the daily
//! outlook and the same-day periods from it. Every step is a pure function
//! of the response and the caller-supplied reference instant.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use tracing::debug;

use crate::bucket::{DayBucket, bucket_days};
use crate::condition::icon_path;
use crate::config::DigestConfig;
use crate::error::{Result, WxDigestError};
use crate::models::{
    CurrentWeather, ForecastDay, ForecastSample, Location, ProcessedLocationData,
    RawForecastResponse, TimeOfDayForecast,
};
use crate::parse::{parse_response, validate_response};
use crate::period::{PeriodPick, classify_periods, pop_band};
use crate::resolve::{DominantStrategy, resolve_dominant};

/// Build the digest for one location.
///
/// # Arguments
///
/// * `response` - The parsed upstream response
/// * `now` - Reference instant that defines "today"
/// * `config` - Offset, strategy and icon options
///
/// # Returns
///
/// The processed data, or [`WxDigestError::InputMalformed`] if any entry
/// fails validation.
pub fn process_forecast(
    response: &RawForecastResponse,
    now: DateTime<Utc>,
    config: &DigestConfig,
) -> Result<ProcessedLocationData> {
    let samples = validate_response(response)?;
    let first = samples
        .first()
        .ok_or_else(|| WxDigestError::InputMalformed("Forecast list is empty".to_string()))?;

    let current = current_weather(first, &config.icon_ext);

    let forecasts: Vec<ForecastDay> = bucket_days(&samples, now, config.offset)
        .iter()
        .filter_map(|bucket| forecast_day(bucket, config.strategy, &config.icon_ext))
        .collect();

    let periods: Vec<TimeOfDayForecast> = classify_periods(&samples, now, config.offset)
        .iter()
        .map(|pick| time_of_day(pick, &config.icon_ext))
        .collect();

    let location = Location {
        name: response.city.name.to_uppercase(),
        subname: config.subname.clone(),
        lat: response.city.coord.lat,
        lon: response.city.coord.lon,
    };

    debug!(
        location = %location.name,
        days = forecasts.len(),
        periods = periods.len(),
        "processed forecast"
    );

    Ok(ProcessedLocationData {
        location,
        current,
        forecasts,
        periods,
    })
}

/// Parse JSON text and build the digest in one step.
pub fn process_forecast_json(
    json: &str,
    now: DateTime<Utc>,
    config: &DigestConfig,
) -> Result<ProcessedLocationData> {
    let response = parse_response(json)?;
    process_forecast(&response, now, config)
}

/// Uppercase Spanish weekday name of a civil date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "LUNES",
        Weekday::Tue => "MARTES",
        Weekday::Wed => "MIÉRCOLES",
        Weekday::Thu => "JUEVES",
        Weekday::Fri => "VIERNES",
        Weekday::Sat => "SÁBADO",
        Weekday::Sun => "DOMINGO",
    }
}

/// Round to the nearest whole degree, halves away from zero.
fn round_temp(value: f64) -> i64 {
    value.round() as i64
}

fn current_weather(sample: &ForecastSample, ext: &str) -> CurrentWeather {
    CurrentWeather {
        temp: round_temp(sample.temp),
        condition: sample.condition.label().to_string(),
        icon: icon_path(sample.condition, sample.day_night, ext),
    }
}

fn forecast_day(bucket: &DayBucket, strategy: DominantStrategy, ext: &str) -> Option<ForecastDay> {
    let (max, min) = bucket.temp_range()?;
    let dominant = resolve_dominant(&bucket.samples, strategy);

    Some(ForecastDay {
        day_name: weekday_name(bucket.date).to_string(),
        temp_max: round_temp(max),
        temp_min: round_temp(min),
        condition: dominant.condition.label().to_string(),
        icon: icon_path(dominant.condition, dominant.day_night, ext),
    })
}

fn time_of_day(pick: &PeriodPick<'_>, ext: &str) -> TimeOfDayForecast {
    TimeOfDayForecast {
        period: pick.period,
        temp: round_temp(pick.sample.temp),
        icon: icon_path(pick.sample.condition, pick.day_night, ext),
        pop: pop_band(pick.sample.pop).to_string(),
    }
}
