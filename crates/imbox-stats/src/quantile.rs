//! Linear-interpolation quantiles over sorted data

/// Sort a copy of the values ascending.
///
/// The input is left untouched so callers can keep encounter order.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Order statistic at quantile `p` (0.0 to 1.0) by linear interpolation.
///
/// For `n` elements the target rank is `p * (n - 1)`; a fractional rank
/// interpolates linearly between the floor and ceiling neighbours. The
/// input must already be sorted ascending. An empty slice yields NaN.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let p = p.clamp(0.0, 1.0);
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        return sorted[lower];
    }

    let fraction = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_sorted_copy_preserves_input() {
        let values = vec![3.0, 1.0, 2.0];
        let sorted = sorted_copy(&values);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.25, 2.0)]
    #[case(0.5, 3.0)]
    #[case(0.75, 4.0)]
    #[case(1.0, 5.0)]
    fn test_quantile_exact_ranks(#[case] p: f64, #[case] expected: f64) {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&sorted, p), expected);
    }

    #[rstest]
    #[case(0.25, 1.75)]
    #[case(0.5, 2.5)]
    #[case(0.75, 3.25)]
    fn test_quantile_interpolated_ranks(#[case] p: f64, #[case] expected: f64) {
        // n = 4, so rank = p * 3 is fractional for the quartiles
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&sorted, p) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_single_element() {
        assert_eq!(quantile_sorted(&[7.5], 0.25), 7.5);
        assert_eq!(quantile_sorted(&[7.5], 0.75), 7.5);
    }

    #[test]
    fn test_quantile_empty_is_nan() {
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn test_quantile_clamps_p() {
        let sorted = vec![1.0, 2.0, 3.0];
        assert_eq!(quantile_sorted(&sorted, -1.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 2.0), 3.0);
    }

    #[test]
    fn test_quantile_duplicates() {
        let sorted = vec![2.0, 2.0, 2.0, 8.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.0);
    }
}
