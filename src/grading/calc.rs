//! Overall grade arithmetic.

/// Testing grade: the plain sum of the scenario marks.
pub fn overall_test(tests: &[f64]) -> f64 {
    tests.iter().sum()
}

/// Quality grade: every criterion except the last, summed and scaled by the
/// last (the weight), then rounded up to the next half point.
pub fn overall_quality(quality: &[f64]) -> f64 {
    let Some((weight, criteria)) = quality.split_last() else {
        return 0.0;
    };
    let raw = criteria.iter().sum::<f64>() * weight;
    (raw * 2.0).ceil() / 2.0
}

/// Render a grade the way it is written into feedback files.
///
/// Whole numbers keep a trailing `.0` so `4` is written as `4.0`.
pub fn format_grade(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_test_sums_marks() {
        assert!((overall_test(&[1.0, 1.0, 0.5, 1.0, 1.0]) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_test_empty_is_zero() {
        assert!(overall_test(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_quality_weighted() {
        let grade = overall_quality(&[1.0, 0.5, 1.0, 1.0, 0.5, 1.0, 0.8]);
        assert!((grade - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_quality_rounds_up_to_half() {
        // 4.3 * 1 -> 4.5
        let grade = overall_quality(&[1.0, 1.0, 1.0, 1.0, 0.3, 1.0]);
        assert!((grade - 4.5).abs() < f64::EPSILON);
        // 4.6 * 1 -> 5.0
        let grade = overall_quality(&[1.0, 1.0, 1.0, 1.0, 0.6, 1.0]);
        assert!((grade - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_quality_exact_half_is_unchanged() {
        let grade = overall_quality(&[1.0, 1.0, 0.5, 1.0]);
        assert!((grade - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_quality_empty_is_zero() {
        assert!(overall_quality(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_grade_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_grade(4.0), "4.0");
        assert_eq!(format_grade(12.0), "12.0");
        assert_eq!(format_grade(0.0), "0.0");
        assert_eq!(format_grade(-1.0), "-1.0");
    }

    #[test]
    fn test_format_grade_fractional() {
        assert_eq!(format_grade(4.5), "4.5");
        assert_eq!(format_grade(0.25), "0.25");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn quality_grade_is_a_half_point_at_or_above_raw(
                criteria in proptest::collection::vec(0u32..=20, 1..8),
                weight_tenths in 0u32..=10,
            ) {
                let mut marks: Vec<f64> = criteria.iter().map(|m| f64::from(*m) / 2.0).collect();
                let weight = f64::from(weight_tenths) / 10.0;
                let raw = marks.iter().sum::<f64>() * weight;
                marks.push(weight);

                let grade = overall_quality(&marks);
                prop_assert!((grade * 2.0).fract() == 0.0);
                prop_assert!(grade + 1e-9 >= raw);
                prop_assert!(grade - raw < 0.5 + 1e-9);
            }

            #[test]
            fn test_grade_is_order_independent(
                marks in proptest::collection::vec(0u32..=4, 0..10),
            ) {
                let marks: Vec<f64> = marks.iter().map(|m| f64::from(*m) / 4.0).collect();
                let mut reversed = marks.clone();
                reversed.reverse();
                prop_assert!((overall_test(&marks) - overall_test(&reversed)).abs() < 1e-9);
            }
        }
    }
}
