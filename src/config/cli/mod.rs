//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! ritmo curve schedule.yaml --every 100
//! ritmo summarize losses.txt --format json
//! ritmo validate schedule.yaml
//! ```

mod core;
mod types;

pub use self::core::{parse_args, Cli, Command, CurveArgs, SummarizeArgs, ValidateArgs};
pub use types::OutputFormat;
