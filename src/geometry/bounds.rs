//! Overlay size and viewBox computation
//!
//! The overlay must contain the element box plus every control-point
//! excursion beyond it. The minimum x/y across the points becomes the
//! coordinate origin so that negative excursions stay visible.

use super::types::{ControlPoint, ElementBounds, ViewBox};

/// Element width plus the sum of absolute x-offsets
pub fn total_width(base_width: f64, points: &[ControlPoint]) -> f64 {
    let excursion: f64 = points.iter().map(|p| p.x.abs()).sum();
    excursion + base_width
}

/// Element height plus the sum of absolute y-offsets
pub fn total_height(base_height: f64, points: &[ControlPoint]) -> f64 {
    let excursion: f64 = points.iter().map(|p| p.y.abs()).sum();
    excursion + base_height
}

/// ViewBox anchored at the minimum x and y across all points
pub fn view_box(points: &[ControlPoint], width: f64, height: f64) -> ViewBox {
    let x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    ViewBox::new(x, y, width, height)
}

/// Size and coordinate space of one overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBounds {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
}

impl OverlayBounds {
    /// Compute the full overlay bounds for an element box
    pub fn compute(element: ElementBounds, points: &[ControlPoint]) -> Self {
        let width = total_width(element.width, points);
        let height = total_height(element.height, points);
        Self {
            width,
            height,
            view_box: view_box(points, width, height),
        }
    }

    /// False when summing offsets overflowed to infinity
    pub fn is_finite(&self) -> bool {
        let vb = &self.view_box;
        [self.width, self.height, vb.x, vb.y, vb.width, vb.height]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(xs: [f64; 4], ys: [f64; 4]) -> Vec<ControlPoint> {
        xs.iter()
            .zip(ys.iter())
            .map(|(x, y)| ControlPoint::new(*x, *y, 0.0))
            .collect()
    }

    #[test]
    fn test_total_width_sums_absolute_offsets() {
        let points = offsets([2.0, 3.0, 4.0, 1.0], [0.0; 4]);
        assert_eq!(total_width(100.0, &points), 110.0);

        let negative = offsets([-2.0, 3.0, -4.0, 1.0], [0.0; 4]);
        assert_eq!(total_width(100.0, &negative), 110.0);
    }

    #[test]
    fn test_total_height_sums_absolute_offsets() {
        let points = offsets([0.0; 4], [-5.0, 0.0, 5.0, 2.5]);
        assert_eq!(total_height(50.0, &points), 62.5);
    }

    #[test]
    fn test_view_box_uses_minimum_from_any_corner() {
        for corner in 0..4 {
            let mut xs = [0.0; 4];
            let mut ys = [3.0; 4];
            xs[corner] = -7.0;
            ys[(corner + 1) % 4] = -2.0;
            let vb = view_box(&offsets(xs, ys), 10.0, 20.0);
            assert_eq!((vb.x, vb.y), (-7.0, -2.0), "corner {corner}");
            assert_eq!((vb.width, vb.height), (10.0, 20.0));
        }
    }

    #[test]
    fn test_huge_offsets_overflow() {
        let points = offsets([1e308, 1e308, 0.0, 0.0], [0.0; 4]);
        let bounds = OverlayBounds::compute(ElementBounds::sized(10.0, 10.0), &points);
        assert_eq!(bounds.width, f64::INFINITY);
        assert!(!bounds.is_finite());

        let small = OverlayBounds::compute(
            ElementBounds::sized(10.0, 10.0),
            &offsets([1.0; 4], [2.0; 4]),
        );
        assert!(small.is_finite());
    }

    #[test]
    fn test_positive_offsets_keep_positive_origin() {
        let vb = view_box(&offsets([4.0, 5.0, 6.0, 7.0], [1.0, 2.0, 3.0, 4.0]), 1.0, 1.0);
        assert_eq!((vb.x, vb.y), (4.0, 1.0));
    }

    #[test]
    fn test_overlay_bounds_for_zero_excursions() {
        let bounds = OverlayBounds::compute(ElementBounds::sized(100.0, 50.0), &offsets([0.0; 4], [0.0; 4]));
        assert_eq!(bounds.width, 100.0);
        assert_eq!(bounds.height, 50.0);
        assert_eq!(bounds.view_box, ViewBox::new(0.0, 0.0, 100.0, 50.0));
    }
}
