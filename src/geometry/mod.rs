//! Overlay geometry
//!
//! Pure data transformation from control points and an element box to an
//! overlay size, a viewBox and a traced outline.

pub mod bounds;
pub mod number;
pub mod trace;
pub mod types;

pub use bounds::{total_height, total_width, view_box, OverlayBounds};
pub use number::NumberFormat;
pub use trace::{trace, PathSegment, TracedPath};
pub use types::*;
