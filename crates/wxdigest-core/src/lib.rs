//! # wxdigest-core
//!
//! Turns a raw multi-day, 3-hour-step weather forecast into display-ready
//! projections for one location.
//!
//! ## Features
//!
//! - **Current conditions**: temperature, label and icon from the first entry.
//! - **Daily outlook**: up to four upcoming civil days with min/max
//!   temperature and one dominant condition, under a selectable strategy.
//! - **Day periods**: morning, afternoon and night picks for today (or
//!   tomorrow once today is over) with banded precipitation probability.
//! - **Fixed offset**: civil dates and hours use a constant UTC offset,
//!   UTC-03:00 by default.
//! - **Deterministic**: no clock reads and no I/O; the caller supplies the
//!   reference instant.
//!
//! ## Example
//!
//! ```rust
//! use wxdigest_core::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let json = r#"{
//!     "list": [{
//!         "dt_txt": "2026-10-17 12:00:00",
//!         "main": {"temp": 24.3, "temp_min": 23.1, "temp_max": 25.0},
//!         "weather": [{"id": 801}],
//!         "sys": {"pod": "d"},
//!         "pop": 0.2
//!     }],
//!     "city": {"name": "Resistencia", "coord": {"lat": -27.45, "lon": -58.99}}
//! }"#;
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
//! let data = process_forecast_json(json, now, &DigestConfig::default()).unwrap();
//!
//! assert_eq!(data.current.temp, 24);
//! assert_eq!(data.current.icon, "day/partly_cloudy_day.webm");
//! assert_eq!(data.periods[0].pop, "10–40%");
//! ```

pub mod bucket;
pub mod condition;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod period;
pub mod process;
pub mod resolve;
pub mod summary;
pub mod tz;

// Re-export commonly used types at the crate root
pub use condition::{Condition, icon_path};
pub use config::DigestConfig;
pub use error::{Result, WxDigestError};
pub use models::{
    CurrentWeather, DayNight, ForecastDay, Location, Period, ProcessedLocationData,
    RawForecastEntry, RawForecastResponse, TimeOfDayForecast,
};
pub use process::{process_forecast, process_forecast_json};
pub use resolve::DominantStrategy;

/// Prelude module for convenient imports.
///
/// ```
/// use wxdigest_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::condition::{Condition, icon_path};
    pub use crate::config::DigestConfig;
    pub use crate::error::{Result, WxDigestError};
    pub use crate::models::*;
    pub use crate::period::pop_band;
    pub use crate::process::{process_forecast, process_forecast_json};
    pub use crate::resolve::DominantStrategy;
    pub use crate::summary::{SummaryProvider, TemplateSummary, summary_or_placeholder};
    pub use crate::tz::{default_offset, parse_offset};
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn five_days_json() -> String {
        let start = chrono::Utc
            .with_ymd_and_hms(2026, 10, 17, 12, 0, 0)
            .single()
            .unwrap();
        let entries: Vec<String> = (0..40)
            .map(|i| {
                let at = start + chrono::Duration::hours(3 * i);
                format!(
                    r#"{{"dt_txt": "{}", "main": {{"temp": 20.2, "temp_min": 19.1, "temp_max": 21.3}},
                        "weather": [{{"id": 803}}], "sys": {{"pod": "d"}}, "pop": 0.5}}"#,
                    at.format("%Y-%m-%d %H:%M:%S")
                )
            })
            .collect();
        format!(
            r#"{{"list": [{}], "city": {{"name": "Villa Ángela", "coord": {{"lat": -27.57, "lon": -60.71}}}}}}"#,
            entries.join(",")
        )
    }

    #[test]
    fn full_workflow_five_day_response() {
        let now = chrono::Utc
            .with_ymd_and_hms(2026, 10, 17, 12, 0, 0)
            .single()
            .unwrap();
        let data = process_forecast_json(&five_days_json(), now, &DigestConfig::default()).unwrap();

        let days: Vec<&str> = data.forecasts.iter().map(|d| d.day_name.as_str()).collect();
        assert_eq!(days, vec!["DOMINGO", "LUNES", "MARTES", "MIÉRCOLES"]);
        assert_eq!(data.location.name, "VILLA ÁNGELA");
        assert_eq!(data.periods.len(), 3);
        assert!(data.periods.iter().all(|p| p.pop == "40–70%"));
        assert!(data.forecasts.iter().all(|d| d.icon == "day/cloudy.webm"));
    }

    #[test]
    fn full_workflow_with_location_override() {
        let now = chrono::Utc
            .with_ymd_and_hms(2026, 10, 17, 12, 0, 0)
            .single()
            .unwrap();
        let data = process_forecast_json(&five_days_json(), now, &DigestConfig::default())
            .unwrap()
            .with_location_names("VILLA ANGELA", "Chaco");
        assert_eq!(data.location.name, "VILLA ANGELA");
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _offset = default_offset();
        let _strategy = DominantStrategy::PriorityMax;
        let _period = Period::Morning;
        assert_eq!(pop_band(0.0), "0–10%");
    }
}
