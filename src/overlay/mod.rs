//! Overlay generation
//!
//! Takes a descriptor and an element box and produces the `<svg>` overlay
//! that decorates the element.

pub mod config;
pub mod svg;

pub use config::{ConfigError, OverlayConfig};
pub use svg::Overlay;
