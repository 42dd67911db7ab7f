use std::process::ExitCode;

use serde::Serialize;
use wxdigest_core::period::pop_band;

use crate::cli::BandArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_band(args: BandArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    if !(0.0..=1.0).contains(&args.pop) {
        return Err(CliError::input(format!(
            "Invalid pop {}. Expected a fraction in [0, 1]",
            args.pop
        )));
    }

    let result = BandResult {
        pop: args.pop,
        band: pop_band(args.pop),
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{} -> {}", result.pop, result.band),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct BandResult {
    pop: f64,
    band: &'static str,
}
