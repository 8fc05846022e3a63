//! Host-delivered table contract
//!
//! The host hands the extension one table with two roles: a text column to
//! group by and a numeric column to aggregate. Roles are identified by the
//! columns' type flags, not by position; when the flags do not resolve both
//! roles, column 0 is treated as the category and column 1 as the measure.

use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, ShapeResult};

/// A single cell value as delivered by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Number(f64),
    Text(String),
    Null,
}

impl PrimitiveValue {
    /// Numeric view of the value, if it is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the value, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PrimitiveValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Label used when the value names a category.
    ///
    /// Text is used as-is and numbers group under their display form; null
    /// cannot name a category.
    pub fn category_label(&self) -> Option<String> {
        match self {
            PrimitiveValue::Text(s) => Some(s.clone()),
            PrimitiveValue::Number(n) => Some(n.to_string()),
            PrimitiveValue::Null => None,
        }
    }
}

impl From<f64> for PrimitiveValue {
    fn from(n: f64) -> Self {
        PrimitiveValue::Number(n)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self {
        PrimitiveValue::Text(s.to_string())
    }
}

/// Descriptor for one table column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDescriptor {
    /// Display name shown in the host's field list
    pub display_name: String,

    /// Whether the host flagged the column as categorical text
    pub is_text: bool,

    /// Whether the host flagged the column as numeric
    pub is_numeric: bool,
}

impl ColumnDescriptor {
    /// A column flagged as categorical text
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            display_name: name.into(),
            is_text: true,
            is_numeric: false,
        }
    }

    /// A column flagged as numeric
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            display_name: name.into(),
            is_text: false,
            is_numeric: true,
        }
    }

    /// A column carrying no usable type flags
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            display_name: name.into(),
            is_text: false,
            is_numeric: false,
        }
    }
}

/// A table-shaped dataset from the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Ordered column descriptors
    pub columns: Vec<ColumnDescriptor>,

    /// Rows aligned to `columns`
    pub rows: Vec<Vec<PrimitiveValue>>,
}

impl DataTable {
    /// Create a new table
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Vec<PrimitiveValue>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Drawing surface dimensions in device-independent pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Resolved column indices for the two table roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    /// Index of the categorical column
    pub category: usize,

    /// Index of the measure column
    pub measure: usize,
}

impl ColumnRoles {
    /// Resolve roles from the host's type flags.
    ///
    /// The category is the first text-flagged column and the measure the
    /// first numeric-flagged column other than it. When either scan comes
    /// up empty the positional fallback applies: column 0 groups, column 1
    /// measures. Extra columns are tolerated and ignored; a table with
    /// fewer than two columns cannot carry both roles and is rejected.
    pub fn detect(columns: &[ColumnDescriptor]) -> ShapeResult<Self> {
        if columns.len() < 2 {
            return Err(ShapeError::TooFewColumns {
                found: columns.len(),
            });
        }

        let category = columns.iter().position(|c| c.is_text);
        let measure = columns
            .iter()
            .enumerate()
            .find(|(i, c)| c.is_numeric && Some(*i) != category)
            .map(|(i, _)| i);

        match (category, measure) {
            (Some(category), Some(measure)) => Ok(Self { category, measure }),
            _ => Ok(Self {
                category: 0,
                measure: 1,
            }),
        }
    }
}
