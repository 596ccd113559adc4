//! Schedule validation logic

use super::error::ValidationError;
use crate::config::schema::ScheduleSpec;

/// Validate a schedule specification
///
/// Checks:
/// - `ref_lr` is finite and non-zero (it is the divisor of every factor)
/// - `start_lr` and `final_lr` are finite
/// - `total_steps >= warmup_steps`
pub fn validate_schedule(spec: &ScheduleSpec) -> Result<(), ValidationError> {
    if !spec.ref_lr.is_finite() || spec.ref_lr == 0.0 {
        return Err(ValidationError::InvalidRefLr(spec.ref_lr));
    }

    for (field, value) in [("start_lr", spec.start_lr), ("final_lr", spec.final_lr)] {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteLr { field, value });
        }
    }

    if spec.total_steps < spec.warmup_steps {
        return Err(ValidationError::TotalBeforeWarmup {
            total_steps: spec.total_steps,
            warmup_steps: spec.warmup_steps,
        });
    }

    Ok(())
}
