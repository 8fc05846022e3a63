//! imbox-render - Geometry layer for box-and-whisker plots
//!
//! Consumes the view model computed by imbox-core and maps it into a flat
//! scene of pixel-space draw primitives:
//!
//! - **LinearScale / BandScale**: value and category position scales
//! - **Scene**: boxes, lines, points, and text labels for the drawing layer
//! - **BoxWhiskerVisual**: the stateful adapter the host drives with
//!   serialized update events
//!
//! The mapping is mechanical: every statistic already lives in the view
//! model, so this layer only applies affine transforms and band layout.

pub mod scale;
pub mod scene;
pub mod visual;

pub use scale::*;
pub use scene::*;
pub use visual::*;
