//! Lexer for point descriptors using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Separates the fields of one point
    #[token(",")]
    Comma,

    /// Separates points; runs of whitespace count as one separator
    #[regex(r"\s+")]
    Space,

    #[regex(
        r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?",
        |lex| lex.slice().parse::<f64>().ok(),
        priority = 3
    )]
    Number(f64),

    /// Anything else up to the next separator (not a number)
    #[regex(r"[^\s,]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

/// Lex input string into tokens with spans
///
/// Every input byte is covered by one of the patterns above, so no input is
/// dropped.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
