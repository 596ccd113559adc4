//! Learning rate schedulers
//!
//! - `WarmupCosineSchedule` - Linear warmup + cosine decay, as a pure step -> factor map
//! - `MultiplierLR` - Stepping driver that applies a factor to a base learning rate

mod multiplier;
mod warmup_cosine;


pub use multiplier::{LRLambda, MultiplierLR};
pub use warmup_cosine::{SchedulePhase, WarmupCosineSchedule};

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f64;

    /// Step the scheduler (typically called after each batch)
    fn step(&mut self);
}
