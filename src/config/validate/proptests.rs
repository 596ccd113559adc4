//! Property-based tests for schedule validation

use super::error::ValidationError;
use super::validator::validate_schedule;
use crate::config::schema::ScheduleSpec;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = ScheduleSpec> {
    (
        0.0f64..1e-2, // start_lr
        1e-6f64..1.0, // ref_lr
        0.0f64..1e-4, // final_lr
        0u64..1_000,  // warmup_steps
        0u64..10_000, // decay steps
    )
        .prop_map(|(start_lr, ref_lr, final_lr, warmup_steps, decay)| ScheduleSpec {
            start_lr,
            ref_lr,
            final_lr,
            warmup_steps,
            total_steps: warmup_steps + decay,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_schedule(&spec).is_ok());
        prop_assert!(spec.build().is_ok());
    }

    #[test]
    fn prop_zero_ref_lr_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.ref_lr = 0.0;
        prop_assert!(matches!(validate_schedule(&spec), Err(ValidationError::InvalidRefLr(_))));
    }

    #[test]
    fn prop_total_before_warmup_fails(spec in arb_valid_spec(), short in 1u64..100) {
        let mut spec = spec;
        spec.warmup_steps = spec.total_steps + short;
        let is_total_before_warmup =
            matches!(validate_schedule(&spec), Err(ValidationError::TotalBeforeWarmup { .. }));
        prop_assert!(is_total_before_warmup);
    }
}
