//! Per-category sample grouping
//!
//! The grouper partitions host rows into per-category numeric samples in a
//! single pass, preserving first-seen category order and the encounter
//! order of values within each category. The structure is an explicit
//! ordered association (group list plus index), so iteration order is
//! deterministic and any string is a safe key.

use std::collections::HashMap;

use crate::table::{ColumnRoles, PrimitiveValue};

/// One category's retained measures, in row encounter order
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySample {
    /// Grouping key
    pub category: String,

    /// Retained finite measures; duplicates kept, order = row order
    pub values: Vec<f64>,
}

/// Insertion-ordered mapping from category to its sample
#[derive(Debug, Clone, Default)]
pub struct GroupedSamples {
    groups: Vec<CategorySample>,
    index: HashMap<String, usize>,
}

impl GroupedSamples {
    /// Number of categories discovered, including measure-free ones
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether any category was discovered
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate categories in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategorySample> {
        self.groups.iter()
    }

    /// Look up one category's sample
    pub fn get(&self, category: &str) -> Option<&CategorySample> {
        self.index.get(category).map(|&i| &self.groups[i])
    }

    /// Register `category`, appending `value` if the row carried one
    fn push(&mut self, category: String, value: Option<f64>) {
        let slot = match self.index.get(category.as_str()) {
            Some(&i) => i,
            None => {
                let i = self.groups.len();
                self.index.insert(category.clone(), i);
                self.groups.push(CategorySample {
                    category,
                    values: Vec::new(),
                });
                i
            }
        };

        if let Some(value) = value {
            self.groups[slot].values.push(value);
        }
    }
}

/// Partition rows into per-category samples.
///
/// Single pass, no sorting, no deduplication. Rows without a category cell
/// or with a null category are skipped entirely; missing, null,
/// non-numeric, and non-finite measures register the category but
/// contribute no value. An empty row sequence yields an empty mapping.
pub fn group(rows: &[Vec<PrimitiveValue>], roles: ColumnRoles) -> GroupedSamples {
    let mut samples = GroupedSamples::default();

    for row in rows {
        let category = match row.get(roles.category).and_then(|v| v.category_label()) {
            Some(category) => category,
            None => continue,
        };

        let value = row
            .get(roles.measure)
            .and_then(|v| v.as_number())
            .filter(|v| v.is_finite());

        samples.push(category, value);
    }

    samples
}
