//! CLI argument definitions for pgnmerge.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pgnmerge",
    version,
    about = "Merge PGN/SPN datasets into one time-aligned table",
    long_about = "Merge time-indexed PGN/SPN parameter datasets into one table, \
                  aligned on a shared time axis via a full outer join.\n\n\
                  Gaps created by the merge are filled per column: continuous \
                  parameters are linearly interpolated, discrete (state-valued) \
                  parameters are held at their last known value. Classification \
                  is resolved from the SPN metadata database."
)]
pub struct Cli {
    /// Path of the merged output CSV.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// PGN dataset files to merge.
    #[arg(value_name = "INPUTS", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Don't fill in missing values (merge-only mode).
    #[arg(long = "no-fill")]
    pub no_fill: bool,

    /// SQLite metadata database holding SPN descriptions.
    #[arg(long = "db", value_name = "PATH", default_value = "J1939.db")]
    pub db: PathBuf,

    /// Where to write the per-column classification log
    /// (default: classification.log beside OUTPUT).
    #[arg(long = "classification-log", value_name = "PATH")]
    pub classification_log: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
