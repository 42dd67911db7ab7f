use std::process::ExitCode;

use serde::Serialize;
use tracing::debug;
use wxdigest_core::summary::{SummaryProvider, TemplateSummary, summary_or_placeholder};
use wxdigest_core::tz::{format_rfc3339, to_civil};
use wxdigest_core::{DigestConfig, DominantStrategy, ProcessedLocationData, process_forecast_json};

use crate::cli::DigestArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{
    SummaryMode, parse_now, parse_strategy, parse_summary_mode, read_input, resolve_offset,
};

pub fn run_digest(args: DigestArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let now = parse_now(args.now.as_deref())?;
    let offset = resolve_offset(args.offset.as_deref(), args.tz.as_deref(), now)?;
    let strategy = parse_strategy(&args.strategy)?;
    let summary_mode = parse_summary_mode(&args.summary)?;

    let mut config = DigestConfig::default()
        .with_offset(offset)
        .with_strategy(strategy)
        .with_icon_ext(args.icon_ext.as_str());
    if let Some(subname) = &args.subname {
        config = config.with_subname(subname.as_str());
    }

    let json = read_input(&args.input)?;
    debug!(input = %args.input, bytes = json.len(), %offset, %strategy, "processing forecast");

    let data = process_forecast_json(&json, now, &config)?;
    let data = match args.name {
        Some(name) => {
            let subname = data.location.subname.clone();
            data.with_location_names(name, subname)
        }
        None => data,
    };

    let provider: Option<&dyn SummaryProvider> = match summary_mode {
        SummaryMode::None => None,
        SummaryMode::Template => Some(&TemplateSummary),
    };
    let summary = summary_or_placeholder(provider, &data);

    let output = DigestOutput {
        reference: format_rfc3339(&to_civil(now, offset)),
        strategy,
        data: &data,
        summary,
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text(&output),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct DigestOutput<'a> {
    reference: String,
    strategy: DominantStrategy,
    #[serde(flatten)]
    data: &'a ProcessedLocationData,
    summary: String,
}

fn print_text(output: &DigestOutput<'_>) {
    let data = output.data;

    println!("{} ({})", data.location.name, data.location.subname);
    println!("Reference: {}", output.reference);
    println!(
        "Now: {}° {} [{}]",
        data.current.temp, data.current.condition, data.current.icon
    );
    println!("Summary: {}", output.summary);

    println!();
    println!("Outlook ({}):", output.strategy);
    if data.forecasts.is_empty() {
        println!("  (no upcoming days)");
    }
    for day in &data.forecasts {
        println!(
            "  {:<10} {:>3}° / {:>3}°  {} [{}]",
            day.day_name, day.temp_max, day.temp_min, day.condition, day.icon
        );
    }

    println!();
    println!("Periods:");
    if data.periods.is_empty() {
        println!("  (no periods)");
    }
    for period in &data.periods {
        println!(
            "  {:<7} {:>3}°  {:<8} [{}]",
            period.period.label(),
            period.temp,
            period.pop,
            period.icon
        );
    }
}
