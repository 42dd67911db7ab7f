use std::process::ExitCode;

use serde::Serialize;
use wxdigest_core::{Condition, DayNight, icon_path};

use crate::cli::ExplainArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::parse_day_night;

pub fn run_explain(args: ExplainArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let day_night = parse_day_night(&args.day_night)?;
    let result = explain_code(args.code, day_night, args.icon_ext.trim_start_matches('.'));

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Code: {}", result.code);
            println!("Condition: {} (priority {})", result.condition, result.priority);
            println!("Label: {}", result.label);
            println!("Icon: {}", result.icon);
            if !result.mapped {
                println!("Note: code is not in the documented set, defaulted to clear");
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct ExplainResult {
    code: i64,
    condition: Condition,
    priority: u8,
    label: &'static str,
    icon: String,
    /// False when the code fell through to the clear default.
    mapped: bool,
}

fn explain_code(code: i64, day_night: DayNight, ext: &str) -> ExplainResult {
    let condition = Condition::from_code(code);

    ExplainResult {
        code,
        condition,
        priority: condition.priority(),
        label: condition.label(),
        icon: icon_path(condition, day_night, ext),
        mapped: condition != Condition::Clear || code == 800,
    }
}
