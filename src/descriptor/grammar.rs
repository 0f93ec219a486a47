//! Descriptor parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::descriptor::lexer::Token;
use crate::geometry::ControlPoint;
use crate::DescriptorError;

/// Parse a descriptor into its ordered list of control points.
///
/// The point count is not checked here; see [`super::extract_points`].
pub fn parse_points(input: &str) -> Result<Vec<ControlPoint>, Vec<DescriptorError>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let len = input.len();

    let token_iter = crate::descriptor::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    descriptor_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn descriptor_parser<'a, I>(
) -> impl Parser<'a, I, Vec<ControlPoint>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let comma = just(Token::Comma);

    let coordinate = select! {
        Token::Number(n) => n,
    }
    .try_map(|n: f64, span| {
        if n.is_finite() {
            Ok(n)
        } else {
            Err(Rich::custom(span, "coordinate is out of range"))
        }
    });

    // An unusable radius falls back to 0
    let radius = select! {
        Token::Number(n) => Some(n),
        Token::Word(_) => None,
    }
    .map(|r: Option<f64>| r.filter(|n| n.is_finite()).unwrap_or(0.0));

    let ignored_field = select! {
        Token::Number(_) => (),
        Token::Word(_) => (),
    };

    let point = coordinate
        .clone()
        .then_ignore(comma.clone())
        .then(coordinate)
        .then(comma.clone().ignore_then(radius.or_not()).or_not())
        .then_ignore(comma.ignore_then(ignored_field.or_not()).repeated())
        .map(|((x, y), r): ((f64, f64), Option<Option<f64>>)| {
            ControlPoint::new(x, y, r.flatten().unwrap_or(0.0))
        });

    point
        .separated_by(just(Token::Space))
        .allow_leading()
        .allow_trailing()
        .collect::<Vec<_>>()
        .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyr(points: &[ControlPoint]) -> Vec<(f64, f64, f64)> {
        points.iter().map(|p| (p.x, p.y, p.r)).collect()
    }

    #[test]
    fn test_parse_four_points() {
        let points = parse_points("0,0,5 10,0,5 10,10,5 0,10,5").expect("should parse");
        assert_eq!(
            xyr(&points),
            vec![
                (0.0, 0.0, 5.0),
                (10.0, 0.0, 5.0),
                (10.0, 10.0, 5.0),
                (0.0, 10.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_missing_radius_defaults_to_zero() {
        let points = parse_points("0,0").expect("should parse");
        assert_eq!(xyr(&points), vec![(0.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_empty_or_non_numeric_radius_defaults_to_zero() {
        let points = parse_points("1,2, 3,4,abc").expect("should parse");
        assert_eq!(xyr(&points), vec![(1.0, 2.0, 0.0), (3.0, 4.0, 0.0)]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let points = parse_points("1,2,3,4,5").expect("should parse");
        assert_eq!(xyr(&points), vec![(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let points = parse_points("  -1,2.5,3\n\t4,5  ").expect("should parse");
        assert_eq!(xyr(&points), vec![(-1.0, 2.5, 3.0), (4.0, 5.0, 0.0)]);
    }

    #[test]
    fn test_blank_descriptor_has_no_points() {
        assert!(parse_points("").expect("should parse").is_empty());
        assert!(parse_points("   ").expect("should parse").is_empty());
    }

    #[test]
    fn test_non_numeric_x_is_rejected() {
        let errs = parse_points("a,0,0").expect_err("should fail");
        assert_eq!(errs[0].span(), Some(&(0..1)));
    }

    #[test]
    fn test_missing_y_is_rejected() {
        assert!(parse_points("5").is_err());
        assert!(parse_points("5,").is_err());
        assert!(parse_points("5,px").is_err());
    }

    #[test]
    fn test_overflowing_coordinate_is_rejected() {
        let errs = parse_points("1e999,0").expect_err("should fail");
        assert!(matches!(errs[0], DescriptorError::Syntax { .. }));
    }
}
