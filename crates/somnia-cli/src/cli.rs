//! CLI argument definitions for the staging importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "somnia",
    version,
    about = "Somnia - Stage sleep & lifestyle survey CSV exports into a relational staging table",
    long_about = "Load a sleep/health survey CSV export and insert each record into a\n\
                  relational staging table, coercing missing values to SQL NULL.\n\
                  One connection per run, one commit per batch."
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
    /// Import a survey CSV export into the staging table.
    Import(ImportArgs),

    /// List the staging columns and the source headers they are read from.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the survey CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// SQLite database file holding the staging table.
    #[arg(
        long = "database",
        value_name = "PATH",
        env = "SOMNIA_DATABASE",
        required_unless_present = "dry_run"
    )]
    pub database: Option<PathBuf>,

    /// Staging table receiving the rows.
    #[arg(
        long = "table",
        value_name = "NAME",
        env = "SOMNIA_TABLE",
        default_value = "temp_import"
    )]
    pub table: String,

    /// Fail fast when expected source columns are missing from the header.
    ///
    /// By default a missing column is logged and its staging values are
    /// NULL for every row. Use this flag to reject the file instead.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Continue past failing rows and commit the survivors.
    ///
    /// By default the first failing insert aborts the batch and nothing is
    /// committed. With this flag, failures are collected and reported at
    /// the end; the process still exits non-zero.
    #[arg(long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Load and map without opening a database connection.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
