//! Day bucketing.
//!
//! Groups forecast samples into civil days at a fixed offset. The current
//! civil day is excluded: the outlook only covers the days that follow.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tracing::debug;

use crate::condition::Condition;
use crate::models::{DayNight, ForecastSample};
use crate::tz::civil_date;

/// Maximum number of days kept for the outlook.
pub const MAX_FORECAST_DAYS: usize = 4;

/// One 3-hour contribution to a day bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySample {
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: Condition,
    pub day_night: DayNight,
}

impl From<&ForecastSample> for DaySample {
    fn from(sample: &ForecastSample) -> Self {
        Self {
            temp_max: sample.temp_max,
            temp_min: sample.temp_min,
            condition: sample.condition,
            day_night: sample.day_night,
        }
    }
}

/// All samples that fall on one civil date, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub samples: Vec<DaySample>,
}

impl DayBucket {
    /// Bucket key, `YYYY-MM-DD`.
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Highest max and lowest min over every sample of the day.
    ///
    /// Returns `None` for an empty bucket, which bucketing never produces.
    pub fn temp_range(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        Some(self.samples.iter().fold(
            (first.temp_max, first.temp_min),
            |(max, min), s| (max.max(s.temp_max), min.min(s.temp_min)),
        ))
    }
}

/// Group samples into civil-date buckets, excluding the reference day.
///
/// Buckets keep first-seen order and only the first
/// [`MAX_FORECAST_DAYS`] are returned. Input order is trusted: the API
/// lists entries in ascending time, so first-seen order is chronological.
///
/// # Examples
///
/// ```
/// use wxdigest_core::bucket::bucket_days;
/// use wxdigest_core::tz::default_offset;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 17, 15, 0, 0).unwrap();
/// let buckets = bucket_days(&[], now, default_offset());
/// assert!(buckets.is_empty());
/// ```
pub fn bucket_days(
    samples: &[ForecastSample],
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<DayBucket> {
    let today = civil_date(now, offset);
    let mut buckets: Vec<DayBucket> = Vec::new();

    for sample in samples {
        let date = civil_date(sample.at, offset);
        if date == today {
            continue;
        }

        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.samples.push(DaySample::from(sample)),
            None => buckets.push(DayBucket {
                date,
                samples: vec![DaySample::from(sample)],
            }),
        }
    }

    if buckets.len() > MAX_FORECAST_DAYS {
        let dropped: Vec<String> = buckets[MAX_FORECAST_DAYS..]
            .iter()
            .map(DayBucket::key)
            .collect();
        debug!(
            kept = MAX_FORECAST_DAYS,
            ?dropped,
            "dropping trailing forecast days"
        );
        buckets.truncate(MAX_FORECAST_DAYS);
    }

    buckets
}
