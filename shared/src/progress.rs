//! Progress ratios for dashboard bars

/// Percentage of a target reached, rounded and clamped to `0..=100`
///
/// Returns `None` when no target is set or the target is not positive, in
/// which case no progress bar is shown for the metric.
pub fn progress_percent(consumed: f64, target: Option<f64>) -> Option<u8> {
    let target = target.filter(|t| *t > 0.0 && t.is_finite())?;
    let pct = (consumed / target * 100.0).round();
    if pct.is_nan() {
        return Some(0);
    }
    Some(pct.clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(500.0, Some(2000.0), Some(25))]
    #[case(0.0, Some(2000.0), Some(0))]
    #[case(2000.0, Some(2000.0), Some(100))]
    #[case(3500.0, Some(2000.0), Some(100))]
    #[case(1.0, Some(3.0), Some(33))]
    #[case(2.0, Some(3.0), Some(67))]
    #[case(500.0, None, None)]
    #[case(500.0, Some(0.0), None)]
    #[case(500.0, Some(-10.0), None)]
    fn test_progress_cases(#[case] consumed: f64, #[case] target: Option<f64>, #[case] expected: Option<u8>) {
        assert_eq!(progress_percent(consumed, target), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_progress_bounded(consumed in 0.0f64..100_000.0, target in 0.01f64..10_000.0) {
            let pct = progress_percent(consumed, Some(target));
            prop_assert!(pct.is_some());
            prop_assert!(pct.unwrap() <= 100);
        }

        #[test]
        fn prop_progress_matches_rounded_ratio(consumed in 0.0f64..10_000.0, target in 1.0f64..10_000.0) {
            let raw = (100.0 * consumed / target).round();
            let expected = raw.clamp(0.0, 100.0) as u8;
            prop_assert_eq!(progress_percent(consumed, Some(target)), Some(expected));
        }

        #[test]
        fn prop_non_positive_target_has_no_progress(consumed in 0.0f64..10_000.0, target in -10_000.0f64..=0.0) {
            prop_assert_eq!(progress_percent(consumed, Some(target)), None);
        }

        #[test]
        fn prop_missing_target_has_no_progress(consumed in 0.0f64..10_000.0) {
            prop_assert_eq!(progress_percent(consumed, None), None);
        }
    }
}
