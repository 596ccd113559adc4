//! Warmup + cosine decay learning rate multiplier

use std::f64::consts::PI;

/// Phase of a [`WarmupCosineSchedule`] at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePhase {
    /// Linear ramp from `start_lr` to `ref_lr`
    Warmup,
    /// Cosine decay from `ref_lr` toward `final_lr`
    Decay,
}

impl std::fmt::Display for SchedulePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulePhase::Warmup => write!(f, "warmup"),
            SchedulePhase::Decay => write!(f, "decay"),
        }
    }
}

/// Warmup + Cosine Decay Learning Rate Multiplier
///
/// Maps a training step to a dimensionless factor that the caller multiplies
/// against `ref_lr` (usually the optimizer's base rate).
/// - Phase 1 (warmup): Linear ramp from start_lr to ref_lr
/// - Phase 2 (decay): Cosine decay from ref_lr to final_lr
///
/// Formula (decay): lr = max(final, final + (ref - final) * 0.5 * (1 + cos(pi * p)))
///
/// Progress is not clamped past `total_steps`: the cosine keeps running and the
/// factor climbs back toward 1.0 one decay period after the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmupCosineSchedule {
    start_lr: f64,
    ref_lr: f64,
    final_lr: f64,
    warmup_steps: u64,
    total_steps: u64,
}

impl WarmupCosineSchedule {
    /// Create a new warmup + cosine schedule
    ///
    /// # Arguments
    /// * `start_lr` - Learning rate at step 0
    /// * `ref_lr` - Peak learning rate reached at the end of warmup
    /// * `final_lr` - Floor of the cosine decay
    /// * `warmup_steps` - Number of warmup steps
    /// * `total_steps` - Total training steps (including warmup)
    ///
    /// No validation happens here; use [`crate::config::ScheduleSpec::build`]
    /// to reject degenerate configurations such as `ref_lr == 0`.
    pub fn new(
        start_lr: f64,
        ref_lr: f64,
        final_lr: f64,
        warmup_steps: u64,
        total_steps: u64,
    ) -> Self {
        tracing::debug!(
            start_lr,
            ref_lr,
            final_lr,
            warmup_steps,
            total_steps,
            "warmup cosine schedule created"
        );
        Self { start_lr, ref_lr, final_lr, warmup_steps, total_steps }
    }

    /// Multiplier for `step`
    pub fn factor(&self, step: u64) -> f64 {
        if step < self.warmup_steps {
            let progress = step as f64 / self.warmup_steps.max(1) as f64;
            let lr = self.start_lr + progress * (self.ref_lr - self.start_lr);
            return lr / self.ref_lr;
        }

        let progress = (step - self.warmup_steps) as f64 / self.decay_steps().max(1) as f64;
        let cosine = 0.5 * (1.0 + (PI * progress).cos());
        let lr = self.final_lr.max(self.final_lr + (self.ref_lr - self.final_lr) * cosine);
        lr / self.ref_lr
    }

    /// Absolute learning rate for `step` (`factor(step) * ref_lr`)
    pub fn lr(&self, step: u64) -> f64 {
        self.factor(step) * self.ref_lr
    }

    /// Which phase `step` falls in
    pub fn phase(&self, step: u64) -> SchedulePhase {
        if step < self.warmup_steps {
            SchedulePhase::Warmup
        } else {
            SchedulePhase::Decay
        }
    }

    /// Length of the decay phase (0 if `total_steps < warmup_steps`)
    pub fn decay_steps(&self) -> u64 {
        self.total_steps.saturating_sub(self.warmup_steps)
    }

    /// Borrow the schedule as a plain `Fn(u64) -> f64`
    pub fn as_fn(&self) -> impl Fn(u64) -> f64 + '_ {
        move |step| self.factor(step)
    }

    pub fn start_lr(&self) -> f64 {
        self.start_lr
    }

    pub fn ref_lr(&self) -> f64 {
        self.ref_lr
    }

    pub fn final_lr(&self) -> f64 {
        self.final_lr
    }

    pub fn warmup_steps(&self) -> u64 {
        self.warmup_steps
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
