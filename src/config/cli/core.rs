//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Ritmo: learning rate schedules and running meters for training loops
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ritmo")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Warmup + cosine learning rate schedules and running metric meters")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the learning rate curve of a schedule config
    Curve(CurveArgs),

    /// Feed numbers through a meter and print the statistics
    Summarize(SummarizeArgs),

    /// Validate a schedule config without evaluating it
    Validate(ValidateArgs),
}

/// Arguments for the curve command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CurveArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Print every N steps
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub every: u64,

    /// Last step to print (defaults to total_steps)
    #[arg(long)]
    pub until: Option<u64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the summarize command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SummarizeArgs {
    /// File with one value per line (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Weight applied to every value
    #[arg(short, long, default_value_t = 1)]
    pub weight: u64,

    /// Label for the meter
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from an iterator (used by tests)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
