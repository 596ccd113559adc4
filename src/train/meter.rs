//! Running statistics over a stream of scalar observations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computes and stores the average and current value
///
/// Tracks current / average / min / max / sum / count over weighted
/// observations. Typically reset by the caller at each epoch or logging
/// interval.
///
/// # Example
///
/// ```
/// use ritmo::train::AverageMeter;
///
/// let mut meter = AverageMeter::named("loss");
/// meter.update(5.0);
/// meter.update(10.0);
///
/// assert_eq!(meter.current(), 10.0);
/// assert_eq!(meter.count(), 2);
/// assert_eq!(meter.average(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AverageMeter {
    name: Option<String>,
    current: f64,
    average: f64,
    sum: f64,
    count: u64,
    min: f64,
    max: f64,
}

impl AverageMeter {
    /// Create an empty, unnamed meter
    pub fn new() -> Self {
        Self {
            name: None,
            current: 0.0,
            average: 0.0,
            sum: 0.0,
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Create an empty meter with a display label
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::new() }
    }

    /// Clear all statistics; the label is kept
    pub fn reset(&mut self) {
        let meter = self.name.as_deref().unwrap_or("");
        tracing::debug!(meter, count = self.count, "meter reset");
        self.current = 0.0;
        self.average = 0.0;
        self.sum = 0.0;
        self.count = 0;
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
    }

    /// Record one observation
    pub fn update(&mut self, value: f64) {
        self.update_weighted(value, 1);
    }

    /// Record an observation that counts `weight` times
    ///
    /// A zero weight only moves `current`; the statistics stay untouched.
    /// A NaN value propagates into every statistic, extrema included.
    pub fn update_weighted(&mut self, value: f64, weight: u64) {
        self.current = value;
        if weight == 0 {
            return;
        }
        if value > self.max || value.is_nan() {
            self.max = value;
        }
        if value < self.min || value.is_nan() {
            self.min = value;
        }
        self.sum += value * weight as f64;
        self.count = self.count.saturating_add(weight);
        self.average = self.sum / self.count as f64;
        tracing::trace!(value, weight, average = self.average, "meter update");
    }

    /// Like [`update_weighted`](Self::update_weighted), rejecting a zero weight
    pub fn try_update_weighted(&mut self, value: f64, weight: u64) -> Result<()> {
        if weight == 0 {
            return Err(Error::InvalidWeight(weight));
        }
        self.update_weighted(value, weight);
        Ok(())
    }

    /// Last observed value
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Weighted mean of all observations (0.0 before the first one)
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Smallest value seen (+inf when empty)
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value seen (-inf when empty)
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Serializable snapshot of the current statistics
    pub fn summary(&self) -> MeterSummary {
        let seen = self.count > 0;
        MeterSummary {
            name: self.name.clone(),
            current: self.current,
            average: self.average,
            sum: self.sum,
            count: self.count,
            min: seen.then_some(self.min),
            max: seen.then_some(self.max),
        }
    }
}

impl Default for AverageMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AverageMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "{:.4} ({:.4})", self.current, self.average)
    }
}

/// Point-in-time view of an [`AverageMeter`]
///
/// `min` and `max` are `None` while `count` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub current: f64,
    pub average: f64,
    pub sum: f64,
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_meter_is_empty() {
        let meter = AverageMeter::new();
        assert!(meter.is_empty());
        assert_eq!(meter.count(), 0);
        assert_eq!(meter.sum(), 0.0);
        assert_eq!(meter.average(), 0.0);
        assert_eq!(meter.current(), 0.0);
        assert_eq!(meter.min(), f64::INFINITY);
        assert_eq!(meter.max(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_two_updates() {
        let mut meter = AverageMeter::new();
        meter.update(5.0);
        meter.update(10.0);

        assert_eq!(meter.current(), 10.0);
        assert_eq!(meter.sum(), 15.0);
        assert_eq!(meter.count(), 2);
        assert_abs_diff_eq!(meter.average(), 7.5, epsilon = 1e-12);
        assert_eq!(meter.min(), 5.0);
        assert_eq!(meter.max(), 10.0);
    }

    #[test]
    fn test_weighted_update() {
        let mut meter = AverageMeter::new();
        meter.update_weighted(3.0, 4);

        assert_eq!(meter.sum(), 12.0);
        assert_eq!(meter.count(), 4);
        assert_abs_diff_eq!(meter.average(), 3.0, epsilon = 1e-12);
        assert_eq!(meter.min(), 3.0);
        assert_eq!(meter.max(), 3.0);
    }

    #[test]
    fn test_mixed_weights_average() {
        let mut meter = AverageMeter::new();
        meter.update_weighted(1.0, 3);
        meter.update_weighted(5.0, 1);
        // (3 + 5) / 4
        assert_abs_diff_eq!(meter.average(), 2.0, epsilon = 1e-12);
        assert_eq!(meter.current(), 5.0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut meter = AverageMeter::named("loss");
        meter.update(1.5);
        meter.update_weighted(-2.0, 7);
        meter.reset();

        assert_eq!(meter.sum(), 0.0);
        assert_eq!(meter.count(), 0);
        assert_eq!(meter.average(), 0.0);
        assert_eq!(meter.current(), 0.0);
        assert_eq!(meter.min(), f64::INFINITY);
        assert_eq!(meter.max(), f64::NEG_INFINITY);
        assert_eq!(meter.name(), Some("loss"));
        assert_eq!(meter, AverageMeter::named("loss"));
    }

    #[test]
    fn test_first_update_sets_both_extrema() {
        let mut meter = AverageMeter::new();
        meter.update(-42.0);
        assert_eq!(meter.min(), -42.0);
        assert_eq!(meter.max(), -42.0);
    }

    #[test]
    fn test_zero_weight_keeps_average_defined() {
        let mut meter = AverageMeter::new();
        meter.update_weighted(9.0, 0);

        assert_eq!(meter.count(), 0);
        assert_eq!(meter.sum(), 0.0);
        assert_eq!(meter.average(), 0.0);
        assert_eq!(meter.current(), 9.0);
        assert_eq!(meter.min(), f64::INFINITY);
        assert_eq!(meter.max(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_weight_only_summary_has_no_extrema() {
        let mut meter = AverageMeter::new();
        meter.update_weighted(9.0, 0);
        meter.update_weighted(-3.0, 0);

        let summary = meter.summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.current, -3.0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
    }

    #[test]
    fn test_zero_weight_does_not_widen_extrema() {
        let mut meter = AverageMeter::new();
        meter.update(2.0);
        meter.update_weighted(100.0, 0);
        assert_eq!(meter.max(), 2.0);
        assert_eq!(meter.summary().max, Some(2.0));
    }

    #[test]
    fn test_nan_observation_reaches_extrema() {
        let mut meter = AverageMeter::new();
        meter.update(1.0);
        meter.update(f64::NAN);
        meter.update(3.0);

        assert_eq!(meter.count(), 3);
        assert!(meter.average().is_nan());
        assert!(meter.min().is_nan());
        assert!(meter.max().is_nan());

        let summary = meter.summary();
        assert_eq!(summary.count, 3);
        assert!(summary.min.is_some_and(f64::is_nan));
        assert!(summary.max.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_try_update_rejects_zero_weight() {
        let mut meter = AverageMeter::new();
        let err = meter.try_update_weighted(1.0, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight(0)));
        assert_eq!(meter, AverageMeter::new());

        meter.try_update_weighted(2.0, 2).unwrap();
        assert_eq!(meter.count(), 2);
    }

    #[test]
    fn test_summary_empty_has_no_extrema() {
        let summary = AverageMeter::new().summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut meter = AverageMeter::named("acc");
        meter.update(0.5);
        meter.update(1.0);

        let json = serde_json::to_value(meter.summary()).unwrap();
        assert_eq!(json["name"], "acc");
        assert_eq!(json["count"], 2);
        assert_eq!(json["min"], 0.5);
        assert_eq!(json["max"], 1.0);
        assert_eq!(json["average"], 0.75);
    }

    #[test]
    fn test_display() {
        let mut meter = AverageMeter::named("loss");
        meter.update(1.0);
        meter.update(2.0);
        assert_eq!(meter.to_string(), "loss 2.0000 (1.5000)");
        assert_eq!(AverageMeter::new().to_string(), "0.0000 (0.0000)");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_average_between_extrema(values in prop::collection::vec(-1e6f64..1e6, 1..64)) {
            let mut meter = AverageMeter::new();
            for v in &values {
                meter.update(*v);
            }
            prop_assert_eq!(meter.count(), values.len() as u64);
            prop_assert!(meter.average() >= meter.min() - 1e-6);
            prop_assert!(meter.average() <= meter.max() + 1e-6);
        }

        #[test]
        fn prop_weight_equals_repeated_updates(value in -1e3f64..1e3, weight in 1u64..32) {
            let mut weighted = AverageMeter::new();
            weighted.update_weighted(value, weight);

            let mut repeated = AverageMeter::new();
            for _ in 0..weight {
                repeated.update(value);
            }

            prop_assert_eq!(weighted.count(), repeated.count());
            prop_assert!((weighted.sum() - repeated.sum()).abs() < 1e-9);
            prop_assert!((weighted.average() - repeated.average()).abs() < 1e-9);
        }
    }
}
