//! SVG overlay assembly and serialization

use crate::descriptor::extract_points;
use crate::geometry::{
    trace, CornerPoints, ElementBounds, NumberFormat, OverlayBounds, TracedPath, ViewBox,
};
use crate::DescriptorError;

use super::OverlayConfig;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One generated overlay: an `<svg>` holding a single traced `<path>`
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Overlay class first, then any extra classes
    pub classes: Vec<String>,
    pub bounds: OverlayBounds,
    pub path: TracedPath,
    format: NumberFormat,
}

impl Overlay {
    /// Run the full pipeline for one element: extract, bound, trace.
    pub fn build(
        descriptor: &str,
        extra_classes: Option<&str>,
        element: ElementBounds,
        config: &OverlayConfig,
    ) -> Result<Self, DescriptorError> {
        let points = extract_points(descriptor)?;
        Self::from_points(&points, extra_classes, element, config)
    }

    /// Build from already validated control points.
    ///
    /// Fails with [`DescriptorError::Overflow`] when offsets are large enough
    /// that the overlay size or path no longer fits in an `f64`.
    pub fn from_points(
        points: &CornerPoints,
        extra_classes: Option<&str>,
        element: ElementBounds,
        config: &OverlayConfig,
    ) -> Result<Self, DescriptorError> {
        let classes = std::iter::once(config.overlay_class.clone())
            .chain(
                extra_classes
                    .unwrap_or_default()
                    .split_whitespace()
                    .map(str::to_string),
            )
            .collect();

        let bounds = OverlayBounds::compute(element, points.as_slice());
        let path = trace(points, element);
        if !bounds.is_finite() || !path.is_finite() {
            return Err(DescriptorError::Overflow);
        }

        Ok(Self {
            classes,
            bounds,
            path,
            format: config.number_format(),
        })
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn view_box(&self) -> ViewBox {
        self.bounds.view_box
    }

    /// The path `d` attribute
    pub fn path_data(&self) -> String {
        self.path.to_svg_d_with(&self.format)
    }

    /// Inline markup, suitable for inserting as an element's first child.
    ///
    /// The overlay is offset by the viewBox origin through inline `top`/`left`
    /// styles.
    pub fn to_markup(&self) -> String {
        let f = &self.format;
        let vb = self.view_box();
        format!(
            r#"<svg xmlns="{}" class="{}" width="{}" height="{}" viewBox="{}" style="top: {}px; left: {}px;"><path d="{}"/></svg>"#,
            SVG_NS,
            escape_xml(&self.classes.join(" ")),
            f.format(self.bounds.width),
            f.format(self.bounds.height),
            vb.to_attribute(f),
            f.format(vb.y),
            f.format(vb.x),
            self.path_data()
        )
    }

    /// Standalone SVG document with an XML declaration
    pub fn to_document(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
            self.to_markup()
        )
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
