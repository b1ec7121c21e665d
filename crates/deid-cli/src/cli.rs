//! CLI argument definitions for the DEID coverage auditor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "deid-audit",
    version,
    about = "DEID coverage auditor - report which DEID operation covers each column",
    long_about = "Convert a hierarchical DEID project configuration into a\n\
                  cross-dataset coverage workbook for data-governance review.\n\
                  One sheet per table, one column per dataset template."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Generate the coverage workbook from a project configuration.
    Report(ReportArgs),

    /// List the known DEID operations.
    Operations,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the project configuration YAML.
    #[arg(value_name = "CONFIG", default_value = "dby_project.yaml")]
    pub config: PathBuf,

    /// Output workbook path.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "deid_info_analysis.xlsx"
    )]
    pub output: PathBuf,
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
