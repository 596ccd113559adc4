//! CLI module for ritmo
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::{
    format_schedule_info, format_summary, parse_value, run_command, sample_curve,
    summarize_reader, write_curve, CurvePoint,
};
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
