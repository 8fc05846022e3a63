//! imbox-core - Per-category box-and-whisker transform pipeline
//!
//! This crate turns a host-delivered two-role table (one categorical
//! column, one numeric column) into a render-ready view model:
//!
//! - **DataTable**: the host input contract with type-flagged columns
//! - **ColumnRoles**: role detection by type flag with positional fallback
//! - **GroupedSamples**: insertion-ordered category to sample mapping
//! - **ViewModel**: one immutable `CategorySummary` per category (quartiles,
//!   median, Tukey fences, outliers) plus the shared maximum for a common
//!   value scale
//! - **VisualSettings**: the persisted options the renderer consumes, with
//!   per-field defaults
//!
//! The pipeline is a pure, synchronous reduction: one table in, one view
//! model out, rebuilt from scratch on every host update. Missing data,
//! unusable column shapes, and non-numeric measures never raise faults;
//! they are expressed as an empty view model, which downstream renders as
//! nothing.

pub mod color;
pub mod error;
pub mod sample;
pub mod settings;
pub mod table;
pub mod transform;
pub mod view;

pub use color::*;
pub use error::*;
pub use sample::*;
pub use settings::*;
pub use table::*;
pub use transform::*;
pub use view::*;
