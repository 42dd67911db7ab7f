use clap::{Parser, Subcommand};

/// Forecast digest tool
#[derive(Parser, Debug)]
#[command(name = "wxdigest", version)]
#[command(about = "Turn a raw 3-hour forecast into current, daily and day-period summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a raw forecast response
    Digest(DigestArgs),
    /// Explain how a condition code is normalized
    Explain(ExplainArgs),
    /// Show the precipitation band for a probability
    Band(BandArgs),
}

#[derive(clap::Args, Debug)]
pub struct DigestArgs {
    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Reference instant (RFC3339); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,

    /// Fixed UTC offset for civil dates (e.g., -03:00); takes precedence over --tz
    #[arg(long, env = "WXDIGEST_OFFSET", allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// IANA timezone, resolved to its offset at the reference instant
    #[arg(long, env = "WXDIGEST_TZ")]
    pub tz: Option<String>,

    /// Dominant condition strategy: daytime-mode, priority-max
    #[arg(long, default_value = "daytime-mode")]
    pub strategy: String,

    /// Icon file extension
    #[arg(long, default_value = "webm")]
    pub icon_ext: String,

    /// Override the location display name
    #[arg(long)]
    pub name: Option<String>,

    /// Override the location subname
    #[arg(long)]
    pub subname: Option<String>,

    /// Summary provider: none, template
    #[arg(long, default_value = "none")]
    pub summary: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ExplainArgs {
    /// Upstream condition code (e.g., 801)
    #[arg(long, allow_hyphen_values = true)]
    pub code: i64,

    /// Icon variant: day, night
    #[arg(long, default_value = "day")]
    pub day_night: String,

    /// Icon file extension
    #[arg(long, default_value = "webm")]
    pub icon_ext: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct BandArgs {
    /// Precipitation probability fraction in [0, 1]
    #[arg(long, allow_hyphen_values = true)]
    pub pop: f64,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
