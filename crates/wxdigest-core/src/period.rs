//! Same-day period classification.
//!
//! Picks one entry per fixed local-hour window (morning, afternoon, night)
//! from today's samples, falling back to tomorrow's when today has none
//! left (late in the evening the API no longer returns the current day).

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tracing::debug;

use crate::models::{DayNight, ForecastSample, Period};
use crate::tz::{civil_date, civil_hour, today_and_tomorrow};

/// A sample selected for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodPick<'a> {
    pub period: Period,
    pub sample: &'a ForecastSample,
    /// Derived from the civil hour, not from the source flag.
    pub day_night: DayNight,
}

/// Select the first sample of each period window.
///
/// Results are always ordered morning, afternoon, night; windows without a
/// matching sample are omitted.
pub fn classify_periods(
    samples: &[ForecastSample],
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<PeriodPick<'_>> {
    let (today, tomorrow) = today_and_tomorrow(now, offset);

    let on = |date: NaiveDate| {
        samples
            .iter()
            .filter(|s| civil_date(s.at, offset) == date)
            .collect::<Vec<_>>()
    };

    let mut selected = on(today);
    if selected.is_empty() {
        debug!(%today, %tomorrow, "no samples left for today, using tomorrow");
        selected = on(tomorrow);
    }

    Period::ALL
        .into_iter()
        .filter_map(|period| {
            selected.iter().copied().find_map(|sample| {
                let hour = civil_hour(sample.at, offset);
                (Period::from_civil_hour(hour) == Some(period)).then(|| PeriodPick {
                    period,
                    sample,
                    day_night: DayNight::from_civil_hour(hour),
                })
            })
        })
        .collect()
}

/// Band a precipitation probability fraction into a display range.
///
/// Lower bounds are inclusive; the top band also includes 1.0.
///
/// ```
/// use wxdigest_core::period::pop_band;
///
/// assert_eq!(pop_band(0.05), "0–10%");
/// assert_eq!(pop_band(0.10), "10–40%");
/// assert_eq!(pop_band(1.0), "70–100%");
/// ```
pub fn pop_band(pop: f64) -> &'static str {
    if pop < 0.10 {
        "0–10%"
    } else if pop < 0.40 {
        "10–40%"
    } else if pop < 0.70 {
        "40–70%"
    } else {
        "70–100%"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::tz::default_offset;
    use chrono::TimeZone;

    /// Sample at the given UTC day/hour; at UTC-3 the civil hour is `hour - 3`.
    fn sample(day: u32, hour: u32, temp: f64, day_night: DayNight) -> ForecastSample {
        ForecastSample {
            at: Utc.with_ymd_and_hms(2026, 10, day, hour, 0, 0).single().unwrap(),
            temp,
            temp_max: temp,
            temp_min: temp,
            condition: Condition::Clear,
            day_night,
            pop: 0.0,
        }
    }

    fn now() -> DateTime<Utc> {
        // 2026-10-17 06:00 local
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).single().unwrap()
    }

    fn periods(picks: &[PeriodPick<'_>]) -> Vec<Period> {
        picks.iter().map(|p| p.period).collect()
    }

    #[test]
    fn picks_one_per_window_in_fixed_order() {
        let samples = vec![
            sample(17, 9, 18.0, DayNight::Day),   // 06 local
            sample(17, 12, 22.0, DayNight::Day),  // 09 local
            sample(17, 15, 26.0, DayNight::Day),  // 12 local
            sample(17, 18, 28.0, DayNight::Day),  // 15 local
            sample(17, 21, 25.0, DayNight::Day),  // 18 local
            sample(18, 0, 21.0, DayNight::Night), // 21 local
        ];
        let picks = classify_periods(&samples, now(), default_offset());

        assert_eq!(
            periods(&picks),
            vec![Period::Morning, Period::Afternoon, Period::Night]
        );
        // first match in list order, not closest to the window midpoint
        assert_eq!(picks[0].sample.temp, 18.0);
        assert_eq!(picks[1].sample.temp, 26.0);
        assert_eq!(picks[2].sample.temp, 21.0);
    }

    #[test]
    fn order_is_fixed_even_for_unsorted_input() {
        let samples = vec![
            sample(18, 0, 21.0, DayNight::Night), // 21 local
            sample(17, 15, 26.0, DayNight::Day),  // 12 local
            sample(17, 12, 22.0, DayNight::Day),  // 09 local
        ];
        let picks = classify_periods(&samples, now(), default_offset());
        assert_eq!(
            periods(&picks),
            vec![Period::Morning, Period::Afternoon, Period::Night]
        );
    }

    #[test]
    fn missing_windows_are_omitted() {
        let samples = vec![
            sample(17, 6, 15.0, DayNight::Night),  // 03 local, no window
            sample(17, 21, 25.0, DayNight::Day),   // 18 local
            sample(18, 0, 21.0, DayNight::Night),  // 21 local
        ];
        let picks = classify_periods(&samples, now(), default_offset());
        assert_eq!(periods(&picks), vec![Period::Afternoon, Period::Night]);
    }

    #[test]
    fn falls_back_to_tomorrow_when_today_is_empty() {
        // 23:30 local on the 17th; the list starts on the 18th
        let late = Utc.with_ymd_and_hms(2026, 10, 18, 2, 30, 0).single().unwrap();
        let samples = vec![
            sample(18, 3, 17.0, DayNight::Night),  // 18th 00 local
            sample(18, 12, 21.0, DayNight::Day),   // 18th 09 local
            sample(18, 18, 29.0, DayNight::Day),   // 18th 15 local
            sample(18, 23, 24.0, DayNight::Night), // 18th 20 local
            sample(19, 12, 30.0, DayNight::Day),   // 19th 09 local
        ];
        let picks = classify_periods(&samples, late, default_offset());

        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].sample.temp, 21.0);
        assert_eq!(picks[1].sample.temp, 29.0);
        assert_eq!(picks[2].sample.temp, 24.0);
    }

    #[test]
    fn no_fallback_when_today_has_any_sample() {
        let samples = vec![
            sample(17, 6, 15.0, DayNight::Night), // 17th 03 local, no window
            sample(18, 12, 21.0, DayNight::Day),  // 18th 09 local
        ];
        let picks = classify_periods(&samples, now(), default_offset());
        assert!(picks.is_empty());
    }

    #[test]
    fn neither_today_nor_tomorrow_gives_nothing() {
        let samples = vec![sample(20, 15, 26.0, DayNight::Day)];
        assert!(classify_periods(&samples, now(), default_offset()).is_empty());
    }

    #[test]
    fn day_night_comes_from_civil_hour() {
        let samples = vec![
            sample(17, 12, 22.0, DayNight::Night), // 09 local, flagged night
            sample(17, 21, 25.0, DayNight::Night), // 18 local, flagged night
            sample(17, 23, 23.0, DayNight::Day),   // 20 local, flagged day
        ];
        let picks = classify_periods(&samples, now(), default_offset());

        assert_eq!(picks[0].day_night, DayNight::Day);
        assert_eq!(picks[1].day_night, DayNight::Day);
        assert_eq!(picks[2].period, Period::Night);
        assert_eq!(picks[2].day_night, DayNight::Night);
    }

    #[test]
    fn pop_bands() {
        assert_eq!(pop_band(0.0), "0–10%");
        assert_eq!(pop_band(0.05), "0–10%");
        assert_eq!(pop_band(0.10), "10–40%");
        assert_eq!(pop_band(0.39), "10–40%");
        assert_eq!(pop_band(0.40), "40–70%");
        assert_eq!(pop_band(0.69), "40–70%");
        assert_eq!(pop_band(0.70), "70–100%");
        assert_eq!(pop_band(1.0), "70–100%");
    }
}
