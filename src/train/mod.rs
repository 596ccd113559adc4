//! Training-loop helpers
//!
//! - `AverageMeter` - Running current / average / min / max / sum / count

mod meter;

pub use meter::{AverageMeter, MeterSummary};
