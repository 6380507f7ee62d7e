//! Error types for template loading and rendering

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A broken placeholder marker found while loading a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("unterminated placeholder `{name}` at {span:?}")]
    Unterminated { name: String, span: Span },

    #[error("placeholder `{name}` opens another marker before closing at {span:?}")]
    Nested { name: String, span: Span },
}

impl MarkerError {
    pub fn span(&self) -> &Span {
        match self {
            MarkerError::Unterminated { span, .. } | MarkerError::Nested { span, .. } => span,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MarkerError::Unterminated { name, .. } | MarkerError::Nested { name, .. } => name,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, note) = match self {
            MarkerError::Unterminated { name, .. } => (
                format!("Unterminated placeholder `{}`", name),
                format!("expected `}}` to close `{{{}`", name),
            ),
            MarkerError::Nested { name, .. } => (
                format!("Nested placeholder inside `{}`", name),
                format!("`{{{}` must be closed before another marker opens", name),
            ),
        };

        // ariadne counts characters, spans are bytes
        let span = self.span();
        let start = char_offset(source, span.start);
        let end = char_offset(source, span.end);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(false))
            .with_message(&message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(note)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    source
        .get(..byte)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| source.chars().count())
}

/// Errors raised by templates and the template registry
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template text has broken placeholder markers and cannot be rendered
    #[error("malformed template `{name}`: {}", format_marker_errors(.errors))]
    Malformed {
        name: String,
        errors: Vec<MarkerError>,
    },

    /// Strict rendering was given keys the template never uses
    #[error("unknown placeholder(s) for template `{template}`: {}", .names.join(", "))]
    UnknownPlaceholder {
        template: String,
        names: Vec<String>,
    },

    #[error("template not found: {name}")]
    NotFound { name: String },

    #[error("duplicate template definition: {name}")]
    Duplicate { name: String },
}

fn format_marker_errors(errors: &[MarkerError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from reading substitution or problem files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}
