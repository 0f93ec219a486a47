//! Core types for the overlay geometry

use std::fmt;

use crate::geometry::number::NumberFormat;

/// A 2D point in overlay coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One corner descriptor: offset from the corner anchor plus a corner radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

/// Exactly four control points, in top-left, top-right, bottom-right,
/// bottom-left order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPoints([ControlPoint; 4]);

impl CornerPoints {
    pub fn new(points: [ControlPoint; 4]) -> Self {
        Self(points)
    }

    /// Build from a parsed point list; `None` unless there are exactly four.
    pub fn from_slice(points: &[ControlPoint]) -> Option<Self> {
        <[ControlPoint; 4]>::try_from(points).ok().map(Self)
    }

    pub fn top_left(&self) -> ControlPoint {
        self.0[0]
    }

    pub fn top_right(&self) -> ControlPoint {
        self.0[1]
    }

    pub fn bottom_right(&self) -> ControlPoint {
        self.0[2]
    }

    pub fn bottom_left(&self) -> ControlPoint {
        self.0[3]
    }

    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.0
    }
}

/// Layout box of a target element, read at render time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// A box of the given size at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// SVG coordinate space of an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The `viewBox` attribute value (`"x y w h"`)
    pub fn to_attribute(&self, format: &NumberFormat) -> String {
        let mut out = String::new();
        format.write(&mut out, self.x);
        out.push(' ');
        format.write(&mut out, self.y);
        out.push(' ');
        format.write(&mut out, self.width);
        out.push(' ');
        format.write(&mut out, self.height);
        out
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attribute(&NumberFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_points_requires_four() {
        let p = ControlPoint::new(0.0, 0.0, 0.0);
        assert!(CornerPoints::from_slice(&[p, p, p]).is_none());
        assert!(CornerPoints::from_slice(&[p, p, p, p, p]).is_none());
        assert!(CornerPoints::from_slice(&[p, p, p, p]).is_some());
    }

    #[test]
    fn test_corner_accessors_follow_clockwise_order() {
        let points = CornerPoints::new([
            ControlPoint::new(1.0, 0.0, 0.0),
            ControlPoint::new(2.0, 0.0, 0.0),
            ControlPoint::new(3.0, 0.0, 0.0),
            ControlPoint::new(4.0, 0.0, 0.0),
        ]);
        let xs = [
            points.top_left().x,
            points.top_right().x,
            points.bottom_right().x,
            points.bottom_left().x,
        ];
        assert_eq!(xs, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_viewbox_display() {
        let vb = ViewBox::new(-5.0, 0.5, 110.0, 60.0);
        assert_eq!(vb.to_string(), "-5 0.5 110 60");
    }
}
