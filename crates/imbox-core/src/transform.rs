//! The statistics-transform pipeline
//!
//! Control flow: role detection, then grouping, then per-category
//! reduction. Every failure mode (missing table, unusable shape, zero
//! rows) is expressed as the empty view model; nothing propagates to the
//! host as a fault.

use imbox_stats::FiveNumberSummary;

use crate::sample::{group, GroupedSamples};
use crate::table::{ColumnRoles, DataTable};
use crate::view::{BoxStyle, CategorySummary, Outlier, ViewModel};

/// Reduce grouped samples to the render-ready view model.
///
/// Categories keep their first-seen order. A category whose retained
/// sequence is empty (every measure was null or non-numeric) is dropped.
/// `global_max` is folded as `max(global_max, max)` across categories,
/// starting from zero to anchor the shared value scale.
pub fn summarize(samples: &GroupedSamples) -> ViewModel {
    let mut summaries = Vec::with_capacity(samples.len());
    let mut global_max = 0.0_f64;

    for sample in samples.iter() {
        let five = match FiveNumberSummary::from_data(&sample.values) {
            Some(five) => five,
            None => continue,
        };
        let fences = five.fences();

        let outliers = sample
            .values
            .iter()
            .filter(|&&value| fences.is_outlier(value))
            .map(|&value| Outlier {
                value,
                category: sample.category.clone(),
            })
            .collect();

        global_max = global_max.max(five.max);
        summaries.push(CategorySummary {
            category: sample.category.clone(),
            min: five.min,
            max: five.max,
            median: five.median,
            q1: five.q1,
            q3: five.q3,
            lower_fence: fences.lower,
            upper_fence: fences.upper,
            outliers,
            raw_sample: sample.values.clone(),
            style: BoxStyle::default(),
        });
    }

    ViewModel {
        summaries,
        global_max,
    }
}

/// Build the view model from a host-delivered table.
///
/// Missing table, unusable column shape, and zero rows all yield
/// `ViewModel::empty()`, which the drawing layer renders as nothing.
pub fn build_view_model(table: Option<&DataTable>) -> ViewModel {
    let table = match table {
        Some(table) => table,
        None => return ViewModel::empty(),
    };

    let roles = match ColumnRoles::detect(&table.columns) {
        Ok(roles) => roles,
        Err(_) => return ViewModel::empty(),
    };

    summarize(&group(&table.rows, roles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnDescriptor, PrimitiveValue};

    fn table(rows: Vec<(&str, PrimitiveValue)>) -> DataTable {
        DataTable::new(
            vec![
                ColumnDescriptor::text("Category"),
                ColumnDescriptor::numeric("Value"),
            ],
            rows.into_iter()
                .map(|(c, v)| vec![PrimitiveValue::from(c), v])
                .collect(),
        )
    }

    fn num(v: f64) -> PrimitiveValue {
        PrimitiveValue::from(v)
    }

    #[test]
    fn test_missing_table_is_empty() {
        assert_eq!(build_view_model(None), ViewModel::empty());
    }

    #[test]
    fn test_zero_rows_is_empty() {
        let model = build_view_model(Some(&table(vec![])));
        assert!(model.is_empty());
        assert_eq!(model.global_max, 0.0);
    }

    #[test]
    fn test_single_column_table_is_empty() {
        let table = DataTable::new(
            vec![ColumnDescriptor::text("Category")],
            vec![vec![PrimitiveValue::from("A")]],
        );
        assert!(build_view_model(Some(&table)).is_empty());
    }

    #[test]
    fn test_outlier_scenario() {
        let model = build_view_model(Some(&table(vec![
            ("A", num(1.0)),
            ("A", num(2.0)),
            ("A", num(3.0)),
            ("A", num(4.0)),
            ("A", num(100.0)),
        ])));

        assert_eq!(model.summaries.len(), 1);
        let a = &model.summaries[0];
        assert_eq!(a.category, "A");
        assert_eq!(a.min, 1.0);
        assert_eq!(a.max, 100.0);
        assert_eq!(a.q1, 2.0);
        assert_eq!(a.median, 3.0);
        assert_eq!(a.q3, 4.0);
        assert_eq!(a.lower_fence, 1.0);
        assert_eq!(a.upper_fence, 7.0);
        assert_eq!(
            a.outliers,
            vec![Outlier {
                value: 100.0,
                category: "A".to_string()
            }]
        );
        assert_eq!(a.raw_sample, vec![1.0, 2.0, 3.0, 4.0, 100.0]);
        assert_eq!(model.global_max, 100.0);
    }

    #[test]
    fn test_all_null_category_dropped() {
        let model = build_view_model(Some(&table(vec![
            ("C", PrimitiveValue::Null),
            ("D", num(1.0)),
        ])));

        assert_eq!(model.summaries.len(), 1);
        assert_eq!(model.summaries[0].category, "D");
    }

    #[test]
    fn test_global_max_across_categories() {
        let model = build_view_model(Some(&table(vec![
            ("A", num(3.0)),
            ("B", num(9.0)),
            ("C", num(6.0)),
        ])));
        assert_eq!(model.global_max, 9.0);
    }
}
