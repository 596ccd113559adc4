//! Multiplicative-factor learning rate scheduler

use super::{LRScheduler, WarmupCosineSchedule};
use crate::optim::LearningRate;

/// Maps a step to a multiplier of the base learning rate
///
/// Implemented for any `Fn(u64) -> f64` and for [`WarmupCosineSchedule`].
pub trait LRLambda {
    /// Multiplier for `step`
    fn factor(&self, step: u64) -> f64;
}

impl<F> LRLambda for F
where
    F: Fn(u64) -> f64,
{
    fn factor(&self, step: u64) -> f64 {
        self(step)
    }
}

impl LRLambda for WarmupCosineSchedule {
    fn factor(&self, step: u64) -> f64 {
        WarmupCosineSchedule::factor(self, step)
    }
}

/// Multiplicative-factor scheduler
///
/// Holds a base learning rate and a step counter; the effective rate is
/// `base_lr * lambda(step)`. Construction evaluates step 0, each
/// [`LRScheduler::step`] call advances one step.
///
/// # Example
///
/// ```
/// use ritmo::optim::{LRScheduler, MultiplierLR, WarmupCosineSchedule};
///
/// let schedule = WarmupCosineSchedule::new(0.0, 1e-3, 1e-5, 100, 1000);
/// let mut scheduler = MultiplierLR::new(1e-3, schedule);
/// assert_eq!(scheduler.get_lr(), 0.0);
///
/// for _ in 0..100 {
///     scheduler.step();
/// }
/// assert!((scheduler.get_lr() - 1e-3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct MultiplierLR<L: LRLambda> {
    base_lr: f64,
    lambda: L,
    last_step: u64,
    current_lr: f64,
}

impl<L: LRLambda> MultiplierLR<L> {
    /// Create a scheduler positioned at step 0
    pub fn new(base_lr: f64, lambda: L) -> Self {
        Self::resume(base_lr, lambda, 0)
    }

    /// Create a scheduler positioned at `last_step` (resuming a run)
    pub fn resume(base_lr: f64, lambda: L, last_step: u64) -> Self {
        let current_lr = base_lr * lambda.factor(last_step);
        Self { base_lr, lambda, last_step, current_lr }
    }

    /// Apply the current learning rate to an optimizer
    pub fn apply<O: LearningRate + ?Sized>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.current_lr);
    }

    /// Step the scheduler and apply the new rate in one call
    pub fn step_and_apply<O: LearningRate + ?Sized>(&mut self, optimizer: &mut O) {
        self.step();
        self.apply(optimizer);
    }

    /// Step the scheduler was last evaluated at
    pub fn last_step(&self) -> u64 {
        self.last_step
    }

    /// Base learning rate the multiplier is applied to
    pub fn base_lr(&self) -> f64 {
        self.base_lr
    }

    /// Current multiplier
    pub fn factor(&self) -> f64 {
        self.lambda.factor(self.last_step)
    }

    /// Borrow the underlying multiplier function
    pub fn lambda(&self) -> &L {
        &self.lambda
    }
}

impl<L: LRLambda> LRScheduler for MultiplierLR<L> {
    fn get_lr(&self) -> f64 {
        self.current_lr
    }

    fn step(&mut self) {
        self.last_step = self.last_step.saturating_add(1);
        self.current_lr = self.base_lr * self.lambda.factor(self.last_step);
        tracing::trace!(step = self.last_step, lr = self.current_lr, "scheduler step");
    }
}
