//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "census",
    version,
    about = "Look up Census population estimates and FIPS codes for places and counties",
    long_about = "Look up Census population estimates and FIPS codes for places and counties.\n\n\
                  Reads the SUB-EST (incorporated places) and CO-EST-ALLDATA (counties)\n\
                  population estimate files and combines lookups into a single report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub data: DataArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Dataset locations. Each flag overrides its `CENSUS_*` environment variable.
#[derive(Args)]
pub struct DataArgs {
    /// Incorporated places file (SUB-EST<year>.csv).
    #[arg(long = "places", value_name = "PATH", global = true)]
    pub places: Option<PathBuf>,

    /// Counties file (CO-EST<year>-ALLDATA.csv).
    #[arg(long = "counties", value_name = "PATH", global = true)]
    pub counties: Option<PathBuf>,

    /// Latest estimate year in the files; the prior year is one less.
    #[arg(long = "current-year", value_name = "YYYY", global = true)]
    pub current_year: Option<u16>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List states present in the loaded datasets.
    States,

    /// List places or counties of a state.
    Options(OptionsArgs),

    /// Resolve one metric for one jurisdiction.
    Resolve(ResolveArgs),

    /// Resolve several selections and print the combined report.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct OptionsArgs {
    /// State FIPS code (e.g. 06 or 6).
    #[arg(long = "state", value_name = "CODE")]
    pub state: String,

    /// Jurisdiction type.
    #[arg(long = "type", value_enum)]
    pub kind: KindArg,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Jurisdiction type.
    #[arg(long = "type", value_enum)]
    pub kind: KindArg,

    /// Jurisdiction GEOID as listed by `options`.
    #[arg(long = "code", value_name = "GEOID")]
    pub code: String,

    /// Metric: `code` or `pop<year>`.
    #[arg(long = "metric", value_name = "METRIC")]
    pub metric: String,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Selection as `<type>:<geoid>:<metric>`, e.g. `place:0600002:pop2024`.
    /// Repeat to add rows or columns; later selections of the same metric win.
    #[arg(long = "select", value_name = "SELECTION", required = true)]
    pub selections: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Place,
    County,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
