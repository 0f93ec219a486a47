//! Point descriptor parsing
//!
//! A descriptor is a whitespace-separated list of `x,y,r` triples, one per
//! corner in top-left, top-right, bottom-right, bottom-left order:
//!
//! ```text
//! 0,0,5 -10,0,5 0,20 0,0
//! ```
//!
//! `x` and `y` are required; `r` defaults to 0 when missing or not a number.

mod grammar;
pub mod lexer;

pub use grammar::parse_points;

use crate::geometry::CornerPoints;
use crate::DescriptorError;

/// Parse a descriptor and require exactly four points.
///
/// Returns the first syntax error when the descriptor cannot be parsed.
pub fn extract_points(descriptor: &str) -> Result<CornerPoints, DescriptorError> {
    let points = parse_points(descriptor).map_err(|errs| {
        errs.into_iter().next().unwrap_or(DescriptorError::Syntax {
            span: 0..descriptor.len(),
            message: "invalid descriptor".to_string(),
            expected: Vec::new(),
        })
    })?;

    CornerPoints::from_slice(&points).ok_or(DescriptorError::PointCount {
        found: points.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ControlPoint;

    #[test]
    fn test_extract_four_points() {
        let points = extract_points("0,0,5 10,0,5 10,10,5 0,10,5").expect("valid");
        assert_eq!(points.top_left(), ControlPoint::new(0.0, 0.0, 5.0));
        assert_eq!(points.top_right(), ControlPoint::new(10.0, 0.0, 5.0));
        assert_eq!(points.bottom_right(), ControlPoint::new(10.0, 10.0, 5.0));
        assert_eq!(points.bottom_left(), ControlPoint::new(0.0, 10.0, 5.0));
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert_eq!(
            extract_points("0,0 1,1 2,2"),
            Err(DescriptorError::PointCount { found: 3 })
        );
        assert_eq!(
            extract_points(""),
            Err(DescriptorError::PointCount { found: 0 })
        );
    }

    #[test]
    fn test_too_many_points_rejected() {
        assert_eq!(
            extract_points("0,0 0,0 0,0 0,0 0,0"),
            Err(DescriptorError::PointCount { found: 5 })
        );
    }

    #[test]
    fn test_syntax_error_surfaces() {
        let err = extract_points("0,0 x,0 0,0 0,0").unwrap_err();
        assert!(matches!(err, DescriptorError::Syntax { .. }));
    }
}
