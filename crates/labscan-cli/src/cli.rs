//! CLI argument definitions for labscan.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use labscan_model::DEFAULT_DATE_FORMAT;

#[derive(Parser)]
#[command(
    name = "labscan",
    version,
    about = "Decode GS1 barcodes scanned from laboratory supplies",
    long_about = "Decode GS1 Application Identifier strings as produced by GS1-128 and\n\
                  2D barcode scanners into GTIN, lot, expiry date and SSCC fields.\n\
                  Accepts parenthesized and bare element strings, with or without FNC1."
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
    /// Decode one or more scanned codes.
    Decode(DecodeArgs),

    /// List the known GS1 Application Identifiers.
    Ais,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Scanned codes to decode.
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Also read codes from stdin, one per line.
    #[arg(long = "stdin")]
    pub stdin: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Validate GTIN/SSCC check digits.
    #[arg(long = "check-digits")]
    pub check_digits: bool,

    /// strftime pattern for rendered dates.
    #[arg(long = "date-format", value_name = "PATTERN", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Text,
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
