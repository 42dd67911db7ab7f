use std::fs;
use std::io::{self, Read};

use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use tracing::debug;
use wxdigest_core::{DayNight, DominantStrategy};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    None,
    Template,
}

pub fn parse_strategy(s: &str) -> CliResult<DominantStrategy> {
    s.parse::<DominantStrategy>().map_err(|_| {
        CliError::input(format!(
            "Invalid strategy '{}'. Expected: daytime-mode, priority-max",
            s
        ))
    })
}

pub fn parse_day_night(s: &str) -> CliResult<DayNight> {
    match s.to_lowercase().as_str() {
        "day" | "d" => Ok(DayNight::Day),
        "night" | "n" => Ok(DayNight::Night),
        _ => Err(CliError::input(format!(
            "Invalid day_night '{}'. Expected: day, night",
            s
        ))),
    }
}

pub fn parse_summary_mode(s: &str) -> CliResult<SummaryMode> {
    match s.to_lowercase().as_str() {
        "none" => Ok(SummaryMode::None),
        "template" => Ok(SummaryMode::Template),
        _ => Err(CliError::input(format!(
            "Invalid summary '{}'. Expected: none, template",
            s
        ))),
    }
}

/// Reference instant from `--now`, or the wall clock when absent.
pub fn parse_now(s: Option<&str>) -> CliResult<DateTime<Utc>> {
    match s {
        Some(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CliError::input(format!("Invalid --now '{}': {}", s, e))),
        None => Ok(Utc::now()),
    }
}

/// Pick the target offset: explicit offset, then IANA zone, then the default.
pub fn resolve_offset(
    offset: Option<&str>,
    tz: Option<&str>,
    now: DateTime<Utc>,
) -> CliResult<FixedOffset> {
    if let Some(offset) = offset {
        return wxdigest_core::tz::parse_offset(offset)
            .map_err(|e| CliError::input(format!("Invalid offset '{}': {}", offset, e)));
    }

    if let Some(name) = tz {
        let zone: Tz = name
            .parse()
            .map_err(|_| CliError::input(format!("Invalid timezone '{}'", name)))?;
        let fixed = now.with_timezone(&zone).offset().fix();
        debug!(tz = name, offset = %fixed, "resolved timezone to fixed offset");
        return Ok(fixed);
    }

    Ok(wxdigest_core::tz::default_offset())
}

pub fn read_input(path: &str) -> CliResult<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::runtime(format!("Failed to read stdin: {}", e)))?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
            .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", path, e)))
    }
}
