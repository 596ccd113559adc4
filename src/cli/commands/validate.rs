//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_schedule_spec, ValidateArgs};
use crate::optim::WarmupCosineSchedule;
use crate::Result;

/// Format schedule parameters as a string
pub fn format_schedule_info(schedule: &WarmupCosineSchedule) -> String {
    [
        format!("  Start LR: {}", schedule.start_lr()),
        format!("  Reference LR: {}", schedule.ref_lr()),
        format!("  Final LR: {}", schedule.final_lr()),
        format!("  Warmup steps: {}", schedule.warmup_steps()),
        format!("  Decay steps: {}", schedule.decay_steps()),
        format!("  Total steps: {}", schedule.total_steps()),
    ]
    .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    let schedule = load_schedule_spec(&args.config)?.build()?;

    log(level, LogLevel::Normal, &format!("✓ Configuration valid: {}", args.config.display()));
    log(level, LogLevel::Verbose, &format_schedule_info(&schedule));
    Ok(())
}
