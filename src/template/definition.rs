//! A loaded, validated template

use tracing::warn;

use crate::error::TemplateError;
use crate::parser::{parse, Document, Segment, Spanned};
use crate::substitutions::Substitutions;
use crate::template::resolver::resolve_placeholders;
use crate::RenderOptions;

/// Immutable template text together with its parsed segments
///
/// Marker syntax is checked once, in [`Template::parse`]. After that every render
/// is a pure function of the substitutions, so a `Template` can be shared freely
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
    document: Document,
}

impl Template {
    /// Parse and validate template text
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Malformed` listing every broken marker.
    pub fn parse(name: impl Into<String>, source: impl Into<String>) -> Result<Self, TemplateError> {
        let name = name.into();
        let source = source.into();
        let document = parse(&source).map_err(|errors| TemplateError::Malformed {
            name: name.clone(),
            errors,
        })?;
        Ok(Self {
            name,
            source,
            document,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The original template text
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Spanned<Segment>] {
        &self.document.segments
    }

    /// Distinct placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.placeholder_occurrences() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.placeholder_occurrences().any(|n| n == name)
    }

    /// How many times `name` appears
    pub fn occurrences(&self, name: &str) -> usize {
        self.placeholder_occurrences().filter(|n| *n == name).count()
    }

    /// Placeholders the substitutions leave unfilled, in order of first appearance
    pub fn missing(&self, substitutions: &Substitutions) -> Vec<&str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !substitutions.contains(name))
            .collect()
    }

    /// Substitution keys the template never uses, sorted
    pub fn unknown<'s>(&self, substitutions: &'s Substitutions) -> Vec<&'s str> {
        substitutions
            .keys()
            .filter(|key| !self.contains(key))
            .collect()
    }

    /// Render with pass-through for anything unmapped
    ///
    /// ```
    /// use solution_stub::{Substitutions, Template};
    ///
    /// let tmpl = Template::parse("greeting", "def {FUNCTION_NAME}() -> {RETURN_TYPE}").unwrap();
    /// let subs = Substitutions::new().with("FUNCTION_NAME", "twoSum");
    /// assert_eq!(tmpl.render(&subs), "def twoSum() -> {RETURN_TYPE}");
    /// ```
    pub fn render(&self, substitutions: &Substitutions) -> String {
        resolve_placeholders(&self.document, substitutions).0
    }

    /// Render, optionally rejecting keys the template does not use
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::UnknownPlaceholder` in strict mode when a
    /// substitution key does not appear in the template.
    pub fn render_with_options(
        &self,
        substitutions: &Substitutions,
        options: &RenderOptions,
    ) -> Result<String, TemplateError> {
        if options.strict {
            let unknown = self.unknown(substitutions);
            if !unknown.is_empty() {
                warn!(template = %self.name, keys = ?unknown, "rejecting unknown placeholders");
                return Err(TemplateError::UnknownPlaceholder {
                    template: self.name.clone(),
                    names: unknown.into_iter().map(str::to_string).collect(),
                });
            }
        }
        Ok(self.render(substitutions))
    }

    fn placeholder_occurrences(&self) -> impl Iterator<Item = &str> {
        self.document.segments.iter().filter_map(|s| match &s.node {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}
