use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod band_cmd;
mod cli;
mod digest_cmd;
mod error;
mod explain_cmd;
mod shared;

use band_cmd::run_band;
use cli::{Cli, Commands};
use digest_cmd::run_digest;
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use explain_cmd::run_explain;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Digest(args) => dispatch(&args.output_format.clone(), args, run_digest),
        Commands::Explain(args) => dispatch(&args.output_format.clone(), args, run_explain),
        Commands::Band(args) => dispatch(&args.output_format.clone(), args, run_band),
    }
}

/// Resolve the output format, run the command and render any error in that format.
fn dispatch<A>(
    requested: &str,
    args: A,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let output_format = match parse_output_format(requested) {
        Ok(format) => format,
        Err(err) => return render_error(&err, output_format_hint(requested)),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}
