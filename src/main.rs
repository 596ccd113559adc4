//! Ritmo CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the schedule every 100 steps
//! ritmo curve schedule.yaml --every 100
//!
//! # Running statistics over a file of values
//! ritmo summarize losses.txt --format json
//!
//! # Validate a schedule config
//! ritmo validate schedule.yaml
//! ```

use clap::Parser;
use ritmo::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
