//! Turns the token stream into a [`Document`]

use tracing::debug;

use crate::error::MarkerError;
use crate::parser::ast::*;
use crate::parser::lexer::{lex, LexFault, Token};

/// Parse template source into segments
///
/// Every malformed marker is reported, not only the first one. The text of a
/// faulty marker is still kept as a literal so later spans stay accurate.
pub fn parse(input: &str) -> Result<Document, Vec<MarkerError>> {
    let mut segments: Vec<Spanned<Segment>> = Vec::new();
    let mut errors = Vec::new();

    for (tok, span) in lex(input) {
        match tok {
            Ok(Token::Placeholder(name)) => {
                segments.push(Spanned::new(
                    Segment::Placeholder(Identifier::new(name)),
                    span,
                ));
            }
            Ok(Token::Text(text)) => push_literal(&mut segments, text, span),
            Err(fault) => {
                let text = &input[span.clone()];
                // Skip the opening brace
                let name = text.get(1..).unwrap_or_default().to_string();
                errors.push(match fault {
                    LexFault::Unterminated => MarkerError::Unterminated {
                        name,
                        span: span.clone(),
                    },
                    LexFault::Nested => MarkerError::Nested {
                        name,
                        span: span.clone(),
                    },
                });
                push_literal(&mut segments, text, span);
            }
        }
    }

    if !errors.is_empty() {
        debug!(errors = errors.len(), "template has malformed markers");
        return Err(errors);
    }

    let doc = Document { segments };
    debug!(
        segments = doc.segments.len(),
        placeholders = doc.placeholder_count(),
        "parsed template"
    );
    Ok(doc)
}

/// Append text, merging with a preceding literal
fn push_literal(segments: &mut Vec<Spanned<Segment>>, text: &str, span: Span) {
    if let Some(Spanned {
        node: Segment::Literal(prev),
        span: prev_span,
    }) = segments.last_mut()
    {
        prev.push_str(text);
        prev_span.end = span.end;
        return;
    }
    segments.push(Spanned::new(Segment::Literal(text.to_string()), span));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty() {
        let doc = parse("").unwrap();
        assert!(doc.segments.is_empty());
    }

    #[test]
    fn test_parse_merges_literal_runs() {
        let doc = parse("x = {a} + ${JSON.y}").unwrap();
        assert_eq!(
            doc.segments,
            vec![Spanned::new(
                Segment::Literal("x = {a} + ${JSON.y}".to_string()),
                0..19
            )]
        );
    }

    #[test]
    fn test_parse_placeholders_with_spans() {
        let doc = parse("{PROBLEM_ID}. {PROBLEM_TITLE}").unwrap();
        assert_eq!(
            doc.segments,
            vec![
                Spanned::new(Segment::Placeholder(Identifier::new("PROBLEM_ID")), 0..12),
                Spanned::new(Segment::Literal(". ".to_string()), 12..14),
                Spanned::new(
                    Segment::Placeholder(Identifier::new("PROBLEM_TITLE")),
                    14..29
                ),
            ]
        );
    }

    #[test]
    fn test_parse_marker_inside_code_braces() {
        let doc = parse("{sol.{FUNCTION_NAME}(x)}").unwrap();
        assert_eq!(doc.placeholder_count(), 1);
        assert_eq!(doc.segments.len(), 3);
    }

    #[test]
    fn test_parse_collects_every_fault() {
        let errors = parse("{A_B \n{C_D{E}}\n{TAIL").unwrap_err();
        assert_eq!(
            errors,
            vec![
                MarkerError::Unterminated {
                    name: "A_B".to_string(),
                    span: 0..4,
                },
                MarkerError::Nested {
                    name: "C_D".to_string(),
                    span: 6..10,
                },
                MarkerError::Unterminated {
                    name: "TAIL".to_string(),
                    span: 15..20,
                },
            ]
        );
    }

    #[test]
    fn test_spans_are_contiguous() {
        let source = "a {B} c {D}{E} f";
        let doc = parse(source).unwrap();
        let mut cursor = 0;
        for seg in &doc.segments {
            assert_eq!(seg.span.start, cursor);
            cursor = seg.span.end;
        }
        assert_eq!(cursor, source.len());
    }
}
