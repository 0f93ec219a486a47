//! Slurve - slanted and curved SVG borders for HTML elements
//!
//! Each decorated element carries a point descriptor, one `x,y,r` triple per
//! corner (top-left, top-right, bottom-right, bottom-left). The descriptor
//! is parsed, an enclosing overlay size and viewBox are computed from the
//! element's layout box, and a path tracing the four corners is injected as
//! an `<svg>` ahead of the element's children.
//!
//! # Example
//!
//! ```rust
//! use slurve::{render_overlay, ElementBounds};
//!
//! let svg = render_overlay("0,0,5 -10,0,5 0,0,5 10,0,5", ElementBounds::sized(100.0, 50.0)).unwrap();
//! assert!(svg.contains(r#"class="slurve-svg""#));
//! assert!(svg.contains(r#"viewBox="-10 0 120 50""#));
//! ```

pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod overlay;

pub use descriptor::{extract_points, parse_points};
pub use error::DescriptorError;
pub use geometry::{ControlPoint, CornerPoints, ElementBounds, NumberFormat, ViewBox};
pub use host::html::{prerender_html, LayoutSheet, PrerenderError, PrerenderOutput};
pub use host::memory::{MemoryDocument, MemoryElement};
pub use host::{Host, HostEvent, RenderReport, RenderTarget, SkipReason, SlurveController, TargetId};
pub use overlay::{ConfigError, Overlay, OverlayConfig};

/// Render the overlay markup for one element with default configuration
pub fn render_overlay(descriptor: &str, element: ElementBounds) -> Result<String, DescriptorError> {
    render_overlay_with_config(descriptor, None, element, &OverlayConfig::default())
}

/// Render the overlay markup for one element
///
/// # Example
///
/// ```rust
/// use slurve::{render_overlay_with_config, ElementBounds, OverlayConfig};
///
/// let config = OverlayConfig::new().with_overlay_class("edge").with_precision(1);
/// let svg = render_overlay_with_config(
///     "0,0,0.25 0,0 0,0 0,0",
///     Some("shadow"),
///     ElementBounds::sized(10.0, 10.0),
///     &config,
/// )
/// .unwrap();
/// assert!(svg.contains(r#"class="edge shadow""#));
/// assert!(svg.contains("M0,0.3"));
/// ```
pub fn render_overlay_with_config(
    descriptor: &str,
    extra_classes: Option<&str>,
    element: ElementBounds,
    config: &OverlayConfig,
) -> Result<String, DescriptorError> {
    let overlay = Overlay::build(descriptor, extra_classes, element, config)?;
    Ok(overlay.to_markup())
}
