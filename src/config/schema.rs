//! YAML schema for learning rate schedule configuration

use crate::optim::WarmupCosineSchedule;
use serde::{Deserialize, Serialize};

/// Warmup + cosine schedule specification
///
/// ```yaml
/// start_lr: 0.0
/// ref_lr: 1.0e-3
/// final_lr: 1.0e-5
/// warmup_steps: 100
/// total_steps: 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Learning rate at step 0
    #[serde(default)]
    pub start_lr: f64,

    /// Peak learning rate reached at the end of warmup
    pub ref_lr: f64,

    /// Floor of the cosine decay
    #[serde(default)]
    pub final_lr: f64,

    /// Number of linear warmup steps
    #[serde(default)]
    pub warmup_steps: u64,

    /// Total training steps, warmup included
    pub total_steps: u64,
}

impl ScheduleSpec {
    /// Validate the spec and construct the schedule
    pub fn build(&self) -> crate::Result<WarmupCosineSchedule> {
        super::validate_schedule(self)?;
        Ok(self.build_unchecked())
    }

    /// Construct the schedule without validation
    pub fn build_unchecked(&self) -> WarmupCosineSchedule {
        WarmupCosineSchedule::new(
            self.start_lr,
            self.ref_lr,
            self.final_lr,
            self.warmup_steps,
            self.total_steps,
        )
    }
}

impl From<&WarmupCosineSchedule> for ScheduleSpec {
    fn from(schedule: &WarmupCosineSchedule) -> Self {
        Self {
            start_lr: schedule.start_lr(),
            ref_lr: schedule.ref_lr(),
            final_lr: schedule.final_lr(),
            warmup_steps: schedule.warmup_steps(),
            total_steps: schedule.total_steps(),
        }
    }
}
