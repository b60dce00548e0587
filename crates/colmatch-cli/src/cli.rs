//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colmatch",
    version,
    about = "Find shared values between the columns of two tabular datasets",
    long_about = "Compare every column of one dataset with every column of another and \
                  report the cells whose values match.\n\n\
                  Sources are CSV files or directories of CSV files; each file is one \
                  dataset named after the file stem. Matching ignores case and surrounding \
                  whitespace, and can also accept near matches by edit distance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow cell values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the datasets found in the sources.
    Sheets(SourceArgs),

    /// Print the headers and rows of one dataset.
    Show(ShowArgs),

    /// Match the columns of two datasets.
    Match(MatchArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// CSV files or directories of CSV files.
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Dataset to print.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: String,

    /// Maximum number of data rows to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// First dataset (A).
    #[arg(long = "left", value_name = "NAME")]
    pub left: String,

    /// Second dataset (B).
    #[arg(long = "right", value_name = "NAME")]
    pub right: String,

    /// Also accept near matches after the exact pass.
    #[arg(long = "fuzzy")]
    pub fuzzy: bool,

    /// Largest edit distance accepted by --fuzzy, as a percentage of the longer value.
    #[arg(
        long = "threshold",
        value_name = "PERCENT",
        default_value_t = 20,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub threshold: u8,

    /// Print every match record, not only the per-column summary.
    #[arg(long = "details")]
    pub details: bool,

    /// Write the result to this file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format (default: from the output extension, else json).
    #[arg(long = "format", value_enum, requires = "output")]
    pub format: Option<OutputFormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Csv,
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
