//! # Ritmo: learning rate schedules and running meters
//!
//! Two small building blocks for a training loop:
//!
//! - [`optim::WarmupCosineSchedule`]: maps a step to a learning rate
//!   multiplier (linear warmup, then cosine decay toward a floor), plus
//!   [`optim::MultiplierLR`] to drive an optimizer's rate from it.
//! - [`train::AverageMeter`]: running current / average / min / max / sum /
//!   count over weighted observations.
//!
//! # Example
//!
//! ```
//! use ritmo::optim::WarmupCosineSchedule;
//! use ritmo::train::AverageMeter;
//!
//! let schedule = WarmupCosineSchedule::new(0.0, 1e-3, 1e-5, 100, 1000);
//! let mut loss = AverageMeter::named("loss");
//!
//! for step in 0..1000 {
//!     let lr = schedule.factor(step) * 1e-3;
//!     assert!(lr <= 1e-3 + 1e-12);
//!     loss.update(1.0 / (step as f64 + 1.0));
//! }
//! assert_eq!(loss.count(), 1000);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod optim;
pub mod train;

pub use error::{Error, Result};
