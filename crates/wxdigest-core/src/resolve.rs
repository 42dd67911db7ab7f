//! Dominant condition resolution.
//!
//! A day bucket holds up to eight 3-hour samples; the outlook shows one
//! condition for the whole day. Two strategies are supported:
//!
//! - [`DominantStrategy::DaytimeMode`] (default): the most frequent
//!   condition among daytime samples, or among all samples if the day has
//!   no daytime sample. The icon always uses the day variant.
//! - [`DominantStrategy::PriorityMax`]: the most severe condition of the
//!   day. The icon uses the day/night flag of the winning sample.
//!
//! Ties go to the first occurrence in both strategies.

use std::str::FromStr;

use serde::Serialize;

use crate::bucket::DaySample;
use crate::condition::Condition;
use crate::error::{Result, WxDigestError};
use crate::models::DayNight;

/// How a day's samples collapse into one condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DominantStrategy {
    /// Most frequent daytime condition.
    #[default]
    DaytimeMode,
    /// Highest severity priority.
    PriorityMax,
}

impl std::fmt::Display for DominantStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DominantStrategy::DaytimeMode => write!(f, "daytime-mode"),
            DominantStrategy::PriorityMax => write!(f, "priority-max"),
        }
    }
}

impl FromStr for DominantStrategy {
    type Err = WxDigestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "daytime-mode" => Ok(DominantStrategy::DaytimeMode),
            "priority-max" => Ok(DominantStrategy::PriorityMax),
            _ => Err(WxDigestError::ParseError(format!(
                "Unknown strategy: '{}'. Expected 'daytime-mode' or 'priority-max'",
                s
            ))),
        }
    }
}

/// The condition and icon variant chosen for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dominant {
    pub condition: Condition,
    pub day_night: DayNight,
}

impl Default for Dominant {
    fn default() -> Self {
        Self {
            condition: Condition::Clear,
            day_night: DayNight::Day,
        }
    }
}

/// Pick the dominant condition of a day. An empty list yields clear/day.
pub fn resolve_dominant(samples: &[DaySample], strategy: DominantStrategy) -> Dominant {
    match strategy {
        DominantStrategy::PriorityMax => priority_max(samples),
        DominantStrategy::DaytimeMode => daytime_mode(samples),
    }
}

fn priority_max(samples: &[DaySample]) -> Dominant {
    let mut best: Option<&DaySample> = None;
    for sample in samples {
        // strict comparison keeps the first of equal priorities
        if best.is_none_or(|b| sample.condition.priority() > b.condition.priority()) {
            best = Some(sample);
        }
    }

    best.map(|s| Dominant {
        condition: s.condition,
        day_night: s.day_night,
    })
    .unwrap_or_default()
}

fn daytime_mode(samples: &[DaySample]) -> Dominant {
    let daytime: Vec<Condition> = samples
        .iter()
        .filter(|s| s.day_night == DayNight::Day)
        .map(|s| s.condition)
        .collect();
    let pool: Vec<Condition> = if daytime.is_empty() {
        samples.iter().map(|s| s.condition).collect()
    } else {
        daytime
    };

    // (condition, count) in first-seen order
    let mut counts: Vec<(Condition, usize)> = Vec::new();
    for condition in pool {
        match counts.iter_mut().find(|(c, _)| *c == condition) {
            Some((_, n)) => *n += 1,
            None => counts.push((condition, 1)),
        }
    }

    let mut best: Option<(Condition, usize)> = None;
    for (condition, count) in counts {
        if best.is_none_or(|(_, n)| count > n) {
            best = Some((condition, count));
        }
    }

    Dominant {
        condition: best.map(|(c, _)| c).unwrap_or_default(),
        day_night: DayNight::Day,
    }
}
