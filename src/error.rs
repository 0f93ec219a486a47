//! Error types for descriptor parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::descriptor::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    #[error("descriptor syntax error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("descriptor must list exactly 4 points (top-left, top-right, bottom-right, bottom-left), found {found}")]
    PointCount { found: usize },

    #[error("descriptor offsets overflow the overlay geometry")]
    Overflow,
}

impl DescriptorError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            DescriptorError::Syntax { span, .. } => Some(span),
            DescriptorError::PointCount { .. } | DescriptorError::Overflow => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message, note) = match self {
            DescriptorError::Syntax {
                span,
                message,
                expected,
            } => {
                let note = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (span.clone(), message.clone(), note)
            }
            DescriptorError::PointCount { .. } | DescriptorError::Overflow => {
                (0..source.len(), self.to_string(), String::new())
            }
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(format!("{}{}", message, note))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for DescriptorError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of descriptor".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of descriptor".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        DescriptorError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Comma => "','".to_string(),
        Token::Space => "whitespace".to_string(),
        Token::Number(n) => format!("number {}", n),
        Token::Word(w) => format!("'{}' (not a number)", w),
    }
}
