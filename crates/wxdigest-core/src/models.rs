//! Core data types for wxdigest.
//!
//! This module defines:
//! - the raw upstream payload ([`RawForecastResponse`], [`RawForecastEntry`])
//! - the validated per-entry [`ForecastSample`] the algorithms work on
//! - the display-ready output ([`ProcessedLocationData`] and its parts)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Parsed 3-hour-step forecast response as returned by the forecast API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastResponse {
    pub list: Vec<RawForecastEntry>,
    pub city: RawCity,
}

/// One 3-hour forecast entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastEntry {
    /// UTC civil timestamp without offset, e.g. `2026-10-17 12:00:00`.
    pub dt_txt: String,
    pub main: RawMain,
    /// Condition list; only the first element is used.
    pub weather: Vec<RawWeather>,
    pub sys: RawSys,
    /// Precipitation probability in `[0, 1]`.
    pub pop: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWeather {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSys {
    /// Part of day flag: `d` or `n`.
    pub pod: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCity {
    pub name: String,
    pub coord: RawCoord,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawCoord {
    pub lat: f64,
    pub lon: f64,
}

/// Day or night, used for icon selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayNight {
    #[default]
    Day,
    Night,
}

impl DayNight {
    /// Interpret the upstream part-of-day flag. Anything but `d` is night.
    pub fn from_pod(pod: &str) -> Self {
        if pod == "d" {
            DayNight::Day
        } else {
            DayNight::Night
        }
    }

    /// Day for civil hours in `[6, 20)`, night otherwise.
    pub fn from_civil_hour(hour: u32) -> Self {
        if (6..20).contains(&hour) {
            DayNight::Day
        } else {
            DayNight::Night
        }
    }
}

impl std::fmt::Display for DayNight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayNight::Day => write!(f, "day"),
            DayNight::Night => write!(f, "night"),
        }
    }
}

/// Fixed local-hour window of the same-day breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    /// Hours 6 to 11
    Morning,
    /// Hours 12 to 18
    Afternoon,
    /// Hours 19 to 23
    Night,
}

impl Period {
    /// Periods in output order.
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Night];

    /// Window containing the given civil hour, if any. Hours 0-5 belong to none.
    pub fn from_civil_hour(hour: u32) -> Option<Self> {
        match hour {
            6..=11 => Some(Period::Morning),
            12..=18 => Some(Period::Afternoon),
            19..=23 => Some(Period::Night),
            _ => None,
        }
    }

    /// Spanish display label.
    pub fn label(self) -> &'static str {
        match self {
            Period::Morning => "MAÑANA",
            Period::Afternoon => "TARDE",
            Period::Night => "NOCHE",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Morning => write!(f, "MORNING"),
            Period::Afternoon => write!(f, "AFTERNOON"),
            Period::Night => write!(f, "NIGHT"),
        }
    }
}

/// A validated forecast entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Entry instant (UTC).
    pub at: DateTime<Utc>,
    pub temp: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: Condition,
    /// Day/night flag as reported by the source.
    pub day_night: DayNight,
    pub pop: f64,
}

/// Location identity attached to a processed result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub subname: String,
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions, derived from the first forecast entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentWeather {
    pub temp: i64,
    pub condition: String,
    pub icon: String,
}

/// One day of the multi-day outlook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    /// Uppercase Spanish weekday, e.g. `MIÉRCOLES`.
    pub day_name: String,
    pub temp_max: i64,
    pub temp_min: i64,
    pub condition: String,
    pub icon: String,
}

/// One period of the same-day breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOfDayForecast {
    pub period: Period,
    pub temp: i64,
    pub icon: String,
    /// Banded precipitation probability, e.g. `10–40%`.
    pub pop: String,
}

/// Complete digest for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedLocationData {
    pub location: Location,
    pub current: CurrentWeather,
    /// At most four days, in first-seen order.
    pub forecasts: Vec<ForecastDay>,
    /// At most three periods, always morning, afternoon, night.
    pub periods: Vec<TimeOfDayForecast>,
}

impl ProcessedLocationData {
    /// Replace the display name and subname, keeping coordinates and weather.
    pub fn with_location_names(self, name: impl Into<String>, subname: impl Into<String>) -> Self {
        Self {
            location: Location {
                name: name.into(),
                subname: subname.into(),
                ..self.location
            },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_night_from_pod() {
        assert_eq!(DayNight::from_pod("d"), DayNight::Day);
        assert_eq!(DayNight::from_pod("n"), DayNight::Night);
        assert_eq!(DayNight::from_pod(""), DayNight::Night);
    }

    #[test]
    fn day_night_from_civil_hour() {
        assert_eq!(DayNight::from_civil_hour(5), DayNight::Night);
        assert_eq!(DayNight::from_civil_hour(6), DayNight::Day);
        assert_eq!(DayNight::from_civil_hour(19), DayNight::Day);
        assert_eq!(DayNight::from_civil_hour(20), DayNight::Night);
        assert_eq!(DayNight::from_civil_hour(0), DayNight::Night);
    }

    #[test]
    fn period_windows() {
        let expected = [
            (0, None),
            (5, None),
            (6, Some(Period::Morning)),
            (11, Some(Period::Morning)),
            (12, Some(Period::Afternoon)),
            (18, Some(Period::Afternoon)),
            (19, Some(Period::Night)),
            (23, Some(Period::Night)),
        ];
        for (hour, period) in expected {
            assert_eq!(Period::from_civil_hour(hour), period, "hour {hour}");
        }
    }

    #[test]
    fn period_serialization_and_labels() {
        assert_eq!(
            serde_json::to_string(&Period::Afternoon).unwrap(),
            "\"AFTERNOON\""
        );
        assert_eq!(Period::Morning.label(), "MAÑANA");
        assert_eq!(format!("{}", Period::Night), "NIGHT");
    }

    #[test]
    fn raw_entry_deserializes_and_ignores_extra_fields() {
        let json = r#"{
            "dt": 1792670400,
            "dt_txt": "2026-10-17 12:00:00",
            "main": {"temp": 24.3, "temp_min": 23.1, "temp_max": 25.0, "humidity": 60},
            "weather": [{"id": 801, "main": "Clouds"}],
            "sys": {"pod": "d"},
            "pop": 0.2
        }"#;
        let entry: RawForecastEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.dt_txt, "2026-10-17 12:00:00");
        assert_eq!(entry.weather[0].id, 801);
        assert_eq!(entry.sys.pod, "d");
    }

    #[test]
    fn location_names_override() {
        let data = ProcessedLocationData {
            location: Location {
                name: "RESISTENCIA".to_string(),
                subname: "Chaco".to_string(),
                lat: -27.45,
                lon: -58.98,
            },
            current: CurrentWeather {
                temp: 20,
                condition: "Despejado".to_string(),
                icon: "day/clear_day.webm".to_string(),
            },
            forecasts: vec![],
            periods: vec![],
        };
        let renamed = data.with_location_names("GANCEDO", "Sudoeste");
        assert_eq!(renamed.location.name, "GANCEDO");
        assert_eq!(renamed.location.subname, "Sudoeste");
        assert_eq!(renamed.location.lat, -27.45);
        assert_eq!(renamed.current.temp, 20);
    }
}
