//! CLI argument definitions for the OPPS code mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "oppsmap",
    version,
    about = "OPPS code mapper - reconcile ICD-10 concepts with HCPCS and fee-schedule rates",
    long_about = "Join an ICD-10 concept catalog against the HCPCS procedure catalog\n\
                  and the OPPS Addendum A/B fee-schedule tables, producing one\n\
                  enriched JSON record per diagnosis concept."
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
    /// Run the full mapping pipeline over the four source files.
    Map(MapArgs),

    /// List the canonical columns expected for each source.
    Columns,

    /// Print the columns detected in a delimited source file.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the HCPCS procedure catalog CSV.
    #[arg(long = "hcpcs", value_name = "FILE")]
    pub hcpcs: PathBuf,

    /// Path to the OPPS Addendum A CSV (first 2 rows are banner).
    #[arg(long = "addendum-a", value_name = "FILE")]
    pub addendum_a: PathBuf,

    /// Path to the OPPS Addendum B CSV (first 4 rows are banner).
    #[arg(long = "addendum-b", value_name = "FILE")]
    pub addendum_b: PathBuf,

    /// Path to the ICD-10 concept catalog JSON.
    #[arg(long = "concepts", value_name = "FILE")]
    pub concepts: PathBuf,

    /// Destination for the enriched catalog JSON.
    #[arg(long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Load, normalize, and map without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// The delimited file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Leading banner rows to skip before the header row.
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 0)]
    pub skip_rows: usize,
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
