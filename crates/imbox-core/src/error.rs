//! Error types for the transform boundary
//!
//! Every error here is handled inside the pipeline and expressed to the
//! host as an empty view model; nothing propagates as a fault.

use thiserror::Error;

/// Errors raised while validating the host table shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The table cannot carry both a category and a measure role
    #[error("table exposes {found} column(s), need a category and a measure")]
    TooFewColumns { found: usize },
}

/// Result type alias for shape validation
pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let err = ShapeError::TooFewColumns { found: 1 };
        assert!(err.to_string().contains('1'));
    }
}
