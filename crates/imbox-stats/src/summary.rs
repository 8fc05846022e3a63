//! Five-number summaries and Tukey fences

use serde::{Deserialize, Serialize};

use crate::quantile::{quantile_sorted, sorted_copy};

/// Five-number summary of a numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// Smallest value
    pub min: f64,
    /// 25th-percentile order statistic
    pub q1: f64,
    /// 50th-percentile order statistic
    pub median: f64,
    /// 75th-percentile order statistic
    pub q3: f64,
    /// Largest value
    pub max: f64,
}

impl FiveNumberSummary {
    /// Compute the summary from unsorted data.
    ///
    /// Sorts a copy; the caller's ordering is preserved. Returns `None`
    /// for an empty sample.
    pub fn from_data(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sorted = sorted_copy(values);
        Some(Self {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range (`q3 - q1`)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whisker fences at 1.5 IQR, clamped to the sample extrema
    pub fn fences(&self) -> TukeyFences {
        let reach = 1.5 * self.iqr();
        TukeyFences {
            lower: (self.q1 - reach).max(self.min),
            upper: (self.q3 + reach).min(self.max),
        }
    }
}

/// Whisker bounds beyond which values count as outliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TukeyFences {
    /// `max(min, q1 - 1.5 IQR)`
    pub lower: f64,
    /// `min(max, q3 + 1.5 IQR)`
    pub upper: f64,
}

impl TukeyFences {
    /// A value is an outlier iff it lies strictly outside `[lower, upper]`
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_far_outlier() {
        let summary = FiveNumberSummary::from_data(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();

        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.iqr(), 2.0);

        let fences = summary.fences();
        // q1 - 1.5 IQR = -1, clamped up to min; q3 + 1.5 IQR = 7
        assert_eq!(fences.lower, 1.0);
        assert_eq!(fences.upper, 7.0);
        assert!(fences.is_outlier(100.0));
        assert!(!fences.is_outlier(4.0));
    }

    #[test]
    fn test_summary_single_value() {
        let summary = FiveNumberSummary::from_data(&[5.0]).unwrap();

        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.q1, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.q3, 5.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.iqr(), 0.0);

        let fences = summary.fences();
        assert_eq!(fences.lower, 5.0);
        assert_eq!(fences.upper, 5.0);
        // the lone value sits exactly on both fences, never outside them
        assert!(!fences.is_outlier(5.0));
    }

    #[test]
    fn test_summary_empty_is_none() {
        assert!(FiveNumberSummary::from_data(&[]).is_none());
    }

    #[test]
    fn test_summary_unsorted_input() {
        let summary = FiveNumberSummary::from_data(&[4.0, 1.0, 100.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
    }

    #[test]
    fn test_summary_is_ordered() {
        let summary = FiveNumberSummary::from_data(&[9.0, 2.0, 7.0, 4.0, 6.0, 1.0]).unwrap();
        assert!(summary.min <= summary.q1);
        assert!(summary.q1 <= summary.median);
        assert!(summary.median <= summary.q3);
        assert!(summary.q3 <= summary.max);
    }

    #[test]
    fn test_fences_stay_inside_sample() {
        // tight quartiles with a wide spread: both fences clamp
        let summary = FiveNumberSummary::from_data(&[0.0, 5.0, 5.0, 5.0, 10.0]).unwrap();
        let fences = summary.fences();
        assert!(fences.lower >= summary.min);
        assert!(fences.upper <= summary.max);
    }

    #[test]
    fn test_values_on_fence_are_not_outliers() {
        let summary = FiveNumberSummary::from_data(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        let fences = summary.fences();
        assert!(!fences.is_outlier(fences.lower));
        assert!(!fences.is_outlier(fences.upper));
        assert!(fences.is_outlier(fences.upper + 1e-9));
    }
}
