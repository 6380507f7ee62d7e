//! Parsed form of a template: literal text interleaved with placeholders

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A node with its source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Placeholder name, without the surrounding braces
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is
    Literal(String),
    /// `{NAME}` marker
    Placeholder(Identifier),
}

/// A parsed template
///
/// Segments are contiguous: the spans cover the source from start to end with no
/// gaps, and no two literal segments are adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub segments: Vec<Spanned<Segment>>,
}

impl Document {
    /// Iterate over placeholder occurrences in source order
    pub fn placeholders(&self) -> impl Iterator<Item = &Spanned<Segment>> {
        self.segments
            .iter()
            .filter(|s| matches!(s.node, Segment::Placeholder(_)))
    }

    /// Number of placeholder occurrences, repeats included
    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }
}
