//! Placeholder resolution: one linear pass over the parsed segments

use tracing::trace;

use crate::parser::{Document, Segment};
use crate::substitutions::Substitutions;

/// Counts gathered while resolving a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Placeholder occurrences replaced with a value
    pub substituted: usize,
    /// Placeholder occurrences left as marker text
    pub passed_through: usize,
}

/// Resolve every placeholder occurrence in `document`
///
/// Values are written verbatim and never re-scanned, so a value that itself looks
/// like `{NAME}` is not expanded again. Placeholders without a value are written
/// back as `{NAME}`, which is exactly their marker text.
pub fn resolve_placeholders(
    document: &Document,
    substitutions: &Substitutions,
) -> (String, ResolutionStats) {
    let mut out = String::with_capacity(document.segments.last().map_or(0, |s| s.span.end));
    let mut stats = ResolutionStats::default();

    for seg in &document.segments {
        match &seg.node {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match substitutions.get(name.as_str()) {
                Some(value) => {
                    out.push_str(value);
                    stats.substituted += 1;
                }
                None => {
                    out.push('{');
                    out.push_str(name.as_str());
                    out.push('}');
                    stats.passed_through += 1;
                }
            },
        }
    }

    trace!(
        substituted = stats.substituted,
        passed_through = stats.passed_through,
        "resolved placeholders"
    );
    (out, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_counts_substituted_and_passed_through() {
        let source = "{A} {B} {A}";
        let doc = parse(source).unwrap();
        let subs = Substitutions::new().with("A", "x");
        let (out, stats) = resolve_placeholders(&doc, &subs);
        assert_eq!(out, "x {B} x");
        assert_eq!(
            stats,
            ResolutionStats {
                substituted: 2,
                passed_through: 1
            }
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let source = "{A}";
        let doc = parse(source).unwrap();
        let subs = Substitutions::new().with("A", "{B}").with("B", "no");
        let (out, _) = resolve_placeholders(&doc, &subs);
        assert_eq!(out, "{B}");
    }

    #[test]
    fn test_empty_value_removes_marker() {
        let source = "f({FUNCTION_PARAMS})";
        let doc = parse(source).unwrap();
        let subs = Substitutions::new().with("FUNCTION_PARAMS", "");
        let (out, _) = resolve_placeholders(&doc, &subs);
        assert_eq!(out, "f()");
    }

    #[test]
    fn test_pass_through_needs_no_source_text() {
        let doc = parse("{LONG_PLACEHOLDER}").unwrap();
        let (out, stats) = resolve_placeholders(&doc, &Substitutions::new());
        assert_eq!(out, "{LONG_PLACEHOLDER}");
        assert_eq!(stats.passed_through, 1);
    }
}
