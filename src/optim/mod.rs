//! Learning rate scheduling for training loops

mod learning_rate;
mod scheduler;

pub use learning_rate::LearningRate;
pub use scheduler::{LRLambda, LRScheduler, MultiplierLR, SchedulePhase, WarmupCosineSchedule};
