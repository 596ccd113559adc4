//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid reference learning rate: {0} (must be finite and non-zero)")]
    InvalidRefLr(f64),

    #[error("Invalid {field}: {value} (must be finite)")]
    NonFiniteLr { field: &'static str, value: f64 },

    #[error("Invalid total_steps: {total_steps} (must be >= warmup_steps = {warmup_steps})")]
    TotalBeforeWarmup { total_steps: u64, warmup_steps: u64 },
}
