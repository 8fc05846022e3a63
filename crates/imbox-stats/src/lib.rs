//! imbox-stats - Order statistics for box-and-whisker summaries
//!
//! This crate provides the statistical primitives the imbox transform
//! pipeline is built on:
//!
//! - **Quantiles**: linear-interpolation order statistics over sorted data
//! - **FiveNumberSummary**: min, quartiles, median, max of one sample
//! - **TukeyFences**: robust whisker bounds at 1.5 IQR, clamped to the sample
//!
//! Everything here is a pure function over `&[f64]`; categories, tables,
//! and rendering concerns live in the crates above.

pub mod quantile;
pub mod summary;

pub use quantile::*;
pub use summary::*;
