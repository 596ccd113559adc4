//! CLI command implementations

mod curve;
mod summarize;
mod validate;


pub use curve::{sample_curve, write_curve, CurvePoint};
pub use summarize::{format_summary, parse_value, summarize_reader};
pub use validate::format_schedule_info;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::Result;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Curve(args) => curve::run_curve(args, log_level),
        Command::Summarize(args) => summarize::run_summarize(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
