//! Corner path tracing
//!
//! Converts four control points and an element box into an SVG path `d`
//! attribute string.

use super::number::NumberFormat;
use super::types::{CornerPoints, ElementBounds, Point};

/// A segment in a traced path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
}

impl PathSegment {
    /// End point of the segment
    pub fn end(&self) -> Point {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p,
            PathSegment::QuadraticTo { end, .. } => *end,
        }
    }
}

/// A traced outline ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    pub segments: Vec<PathSegment>,
}

impl TracedPath {
    /// Convert to SVG path `d` attribute string with full precision
    pub fn to_svg_d(&self) -> String {
        self.to_svg_d_with(&NumberFormat::default())
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d_with(&self, format: &NumberFormat) -> String {
        let mut d = String::new();

        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push('M');
                    push_point(&mut d, *p, format);
                }
                PathSegment::LineTo(p) => {
                    d.push('L');
                    push_point(&mut d, *p, format);
                }
                PathSegment::QuadraticTo { control, end } => {
                    d.push('Q');
                    push_point(&mut d, *control, format);
                    d.push(' ');
                    push_point(&mut d, *end, format);
                }
            }
        }

        d
    }

    /// True when every coordinate is a finite number
    pub fn is_finite(&self) -> bool {
        self.segments.iter().all(|seg| match seg {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p.is_finite(),
            PathSegment::QuadraticTo { control, end } => control.is_finite() && end.is_finite(),
        })
    }

    /// The three points of each corner curve (start, control, end), clockwise
    /// from top-left.
    pub fn corners(&self) -> Vec<[Point; 3]> {
        let mut corners = Vec::with_capacity(4);
        let mut current: Option<Point> = None;
        for seg in &self.segments {
            if let (PathSegment::QuadraticTo { control, end }, Some(start)) = (seg, current) {
                corners.push([start, *control, *end]);
            }
            current = Some(seg.end());
        }
        corners
    }
}

fn push_point(d: &mut String, p: Point, format: &NumberFormat) {
    format.write(d, p.x);
    d.push(',');
    format.write(d, p.y);
}

/// Trace the four rounded corners clockwise from the top-left.
///
/// Each corner curves between two edge-aligned points offset by its radius,
/// using the raw control point as the curve control. The outline is left
/// open (no `Z`). A zero radius collapses a corner into a sharp angle.
pub fn trace(points: &CornerPoints, bounds: ElementBounds) -> TracedPath {
    let a = points.top_left();
    let b = points.top_right();
    let c = points.bottom_right();
    let d = points.bottom_left();
    let w = bounds.width;
    let h = bounds.height;

    let segments = vec![
        PathSegment::MoveTo(Point::new(a.x, a.y + a.r)),
        PathSegment::QuadraticTo {
            control: Point::new(a.x, a.y),
            end: Point::new(a.x + a.r, a.y),
        },
        PathSegment::LineTo(Point::new(w + b.x - b.r, b.y)),
        PathSegment::QuadraticTo {
            control: Point::new(w + b.x, b.y),
            end: Point::new(w + b.x, b.y + b.r),
        },
        PathSegment::LineTo(Point::new(w + c.x, h + c.y - c.r)),
        PathSegment::QuadraticTo {
            control: Point::new(w + c.x, h + c.y),
            end: Point::new(w + c.x - c.r, h + c.y),
        },
        PathSegment::LineTo(Point::new(d.x + d.r, h + d.y)),
        PathSegment::QuadraticTo {
            control: Point::new(d.x, h + d.y),
            end: Point::new(d.x, h + d.y - d.r),
        },
    ];

    TracedPath { segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::types::ControlPoint;

    fn uniform(x: f64, y: f64, r: f64) -> CornerPoints {
        CornerPoints::new([ControlPoint::new(x, y, r); 4])
    }

    #[test]
    fn test_sharp_box() {
        let path = trace(&uniform(0.0, 0.0, 0.0), ElementBounds::sized(100.0, 50.0));
        assert_eq!(
            path.to_svg_d(),
            "M0,0 Q0,0 0,0 L100,0 Q100,0 100,0 L100,50 Q100,50 100,50 L0,50 Q0,50 0,50"
        );
    }

    #[test]
    fn test_overflowing_offsets_are_not_finite() {
        let points = CornerPoints::new([
            ControlPoint::new(0.0, 0.0, 0.0),
            ControlPoint::new(f64::MAX, 0.0, 0.0),
            ControlPoint::new(0.0, 0.0, 0.0),
            ControlPoint::new(0.0, 0.0, 0.0),
        ]);
        assert!(!trace(&points, ElementBounds::sized(f64::MAX, 1.0)).is_finite());
        assert!(trace(&uniform(1.0, 1.0, 1.0), ElementBounds::sized(10.0, 10.0)).is_finite());
    }

    #[test]
    fn test_rounded_corners() {
        let path = trace(&uniform(0.0, 0.0, 5.0), ElementBounds::sized(100.0, 50.0));
        assert_eq!(
            path.to_svg_d(),
            "M0,5 Q0,0 5,0 L95,0 Q100,0 100,5 L100,45 Q100,50 95,50 L5,50 Q0,50 0,45"
        );
    }

    #[test]
    fn test_slanted_corners() {
        let points = CornerPoints::new([
            ControlPoint::new(-10.0, 0.0, 0.0),
            ControlPoint::new(0.0, -20.0, 0.0),
            ControlPoint::new(10.0, 0.0, 0.0),
            ControlPoint::new(0.0, 20.0, 0.0),
        ]);
        let path = trace(&points, ElementBounds::sized(200.0, 100.0));
        assert_eq!(
            path.to_svg_d(),
            "M-10,0 Q-10,0 -10,0 L200,-20 Q200,-20 200,-20 L210,100 Q210,100 210,100 L0,120 Q0,120 0,120"
        );
    }

    #[test]
    fn test_zero_radius_corners_are_degenerate() {
        let points = CornerPoints::new([
            ControlPoint::new(-3.0, 1.0, 0.0),
            ControlPoint::new(4.0, -2.0, 0.0),
            ControlPoint::new(6.0, 7.0, 0.0),
            ControlPoint::new(-1.0, 9.0, 0.0),
        ]);
        let path = trace(&points, ElementBounds::sized(80.0, 40.0));
        let corners = path.corners();
        assert_eq!(corners.len(), 4);
        for [start, control, end] in corners {
            assert_eq!(start, control);
            assert_eq!(control, end);
        }
    }

    #[test]
    fn test_no_close_command() {
        let path = trace(&uniform(1.0, 1.0, 2.0), ElementBounds::sized(10.0, 10.0));
        let d = path.to_svg_d();
        assert!(d.starts_with('M'));
        assert!(!d.contains('Z'));
        assert_eq!(d.matches('Q').count(), 4);
        assert_eq!(d.matches('L').count(), 3);
    }

    #[test]
    fn test_precision_applies_to_every_coordinate() {
        let path = trace(&uniform(0.1, 0.2, 0.0), ElementBounds::sized(0.2, 0.1));
        assert!(path.to_svg_d().contains("0.30000000000000004"));
        let rounded = path.to_svg_d_with(&NumberFormat::with_precision(2));
        assert!(!rounded.contains("0.30000000000000004"));
        assert!(rounded.contains("0.3,0.2"));
    }
}
