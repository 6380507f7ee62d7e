//! Lexer for solution-stub templates using logos
//!
//! A template is mostly literal text. The only syntax is the placeholder marker
//! `{NAME}` where `NAME` is an upper-case identifier. Braces that do not open such a
//! name (`{example1}`, `${JSON.stringify(x)}`, a block `{`) stay literal.

use logos::{Lexer, Logos};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Fault raised while scanning a placeholder marker
///
/// Every input byte is covered by one of the token patterns, so the default variant
/// only ever comes out of [`dangling_marker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// `{NAME` followed by whitespace or end of input
    #[default]
    Unterminated,
    /// `{NAME` followed by another `{`
    Nested,
}

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(error = LexFault)]
pub enum Token<'src> {
    /// `{NAME}`, carrying the bare name
    #[regex(r"\{[A-Z][A-Z0-9_]*\}", placeholder_name)]
    Placeholder(&'src str),

    /// Literal text, including braces that do not open a placeholder
    #[regex(r"[^{]+", |lex| lex.slice())]
    #[token("{", |lex| lex.slice())]
    #[regex(r"\{[A-Z][A-Z0-9_]*", dangling_marker)]
    Text(&'src str),
}

fn placeholder_name<'src>(lex: &mut Lexer<'src, Token<'src>>) -> &'src str {
    let s = lex.slice();
    &s[1..s.len() - 1]
}

/// Decide what an opening marker without its closing `}` is.
///
/// `{JSON.stringify` or `{Dict` is ordinary code; `{NAME` running into whitespace,
/// end of input or another `{` is a broken marker.
fn dangling_marker<'src>(lex: &mut Lexer<'src, Token<'src>>) -> Result<&'src str, LexFault> {
    match lex.remainder().chars().next() {
        None => Err(LexFault::Unterminated),
        Some(c) if c.is_whitespace() => Err(LexFault::Unterminated),
        Some('{') => Err(LexFault::Nested),
        Some(_) => Ok(lex.slice()),
    }
}

/// Lex input string into tokens with spans, faults included
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token<'_>, LexFault>, Span)> + '_ {
    Token::lexer(input).spanned()
}
