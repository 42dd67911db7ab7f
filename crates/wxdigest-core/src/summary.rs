//! Narrative summary hook.
//!
//! A summary is an optional one-line description of the current weather,
//! produced by a caller-owned provider (for example a text generation
//! service held by the fetch layer). The digest itself never depends on it.

use tracing::debug;

use crate::models::{CurrentWeather, ProcessedLocationData};

/// Text used when no summary is available.
pub const SUMMARY_PLACEHOLDER: &str = "Resumen del clima no disponible.";

/// Produces a short narrative for a location's current weather.
pub trait SummaryProvider {
    /// Return `None` when no summary can be produced.
    fn summarize(&self, current: &CurrentWeather, location_name: &str) -> Option<String>;
}

/// Offline provider that fills a fixed sentence template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummary;

impl SummaryProvider for TemplateSummary {
    fn summarize(&self, current: &CurrentWeather, location_name: &str) -> Option<String> {
        Some(format!(
            "{}: {} con {}°C.",
            location_name, current.condition, current.temp
        ))
    }
}

/// Ask the provider for a summary, or fall back to [`SUMMARY_PLACEHOLDER`].
pub fn summary_or_placeholder(
    provider: Option<&dyn SummaryProvider>,
    data: &ProcessedLocationData,
) -> String {
    let Some(provider) = provider else {
        debug!("no summary provider configured");
        return SUMMARY_PLACEHOLDER.to_string();
    };

    match provider.summarize(&data.current, &data.location.name) {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => {
            debug!(location = %data.location.name, "summary provider returned nothing");
            SUMMARY_PLACEHOLDER.to_string()
        }
    }
}
