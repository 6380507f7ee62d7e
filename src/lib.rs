//! Solution Stub - placeholder templates for coding-exercise skeletons
//!
//! This library holds the built-in solution skeletons and the small rendering
//! engine that fills their `{NAME}` placeholders.
//!
//! # Example
//!
//! ```rust
//! use solution_stub::{render, Substitutions};
//!
//! let subs = Substitutions::new().with("FUNCTION_NAME", "twoSum");
//! let out = render("def {FUNCTION_NAME}() -> {RETURN_TYPE}", &subs).unwrap();
//! assert_eq!(out, "def twoSum() -> {RETURN_TYPE}");
//! ```

pub mod error;
pub mod parser;
pub mod stub;
pub mod substitutions;
pub mod template;

pub use error::{LoadError, MarkerError, TemplateError};
pub use parser::{parse, Document};
pub use stub::{Example, ProblemStub};
pub use substitutions::Substitutions;
pub use template::{Language, Template, TemplateRegistry};

/// Options for a render call
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Reject substitution keys the template does not contain
    pub strict: bool,
}

impl RenderOptions {
    /// Create a new set of options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict key checking
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Parse template text and render it, passing unmapped placeholders through
///
/// # Errors
///
/// Returns `TemplateError::Malformed` when the template has broken markers.
pub fn render(source: &str, substitutions: &Substitutions) -> Result<String, TemplateError> {
    render_with_options(source, substitutions, &RenderOptions::default())
}

/// Parse template text and render it with custom options
///
/// # Example
///
/// ```rust
/// use solution_stub::{render_with_options, RenderOptions, Substitutions, TemplateError};
///
/// let subs = Substitutions::new().with("FUNCTON_NAME", "typo");
/// let err = render_with_options("{FUNCTION_NAME}", &subs, &RenderOptions::new().with_strict(true))
///     .unwrap_err();
/// assert!(matches!(err, TemplateError::UnknownPlaceholder { .. }));
/// ```
pub fn render_with_options(
    source: &str,
    substitutions: &Substitutions,
    options: &RenderOptions,
) -> Result<String, TemplateError> {
    Template::parse("inline", source)?.render_with_options(substitutions, options)
}

/// Render the built-in skeleton for `language` from a problem description
///
/// ```rust
/// use solution_stub::{render_stub, Language, ProblemStub};
///
/// let stub = ProblemStub::new("1", "Two Sum").with_function("twoSum", "nums, target");
/// let code = render_stub(Language::TypeScript, &stub).unwrap();
/// assert!(code.contains("function twoSum(nums, target)"));
/// ```
pub fn render_stub(language: Language, stub: &ProblemStub) -> Result<String, TemplateError> {
    Ok(language.template()?.render(&stub.to_substitutions()))
}

/// Render the skeleton named by the problem's own `language`, Python when unset
///
/// ```rust
/// use solution_stub::{render_problem, ProblemStub};
///
/// let stub = ProblemStub::from_toml_str("id = \"1\"\ntitle = \"Two Sum\"\nlanguage = \"go\"\n").unwrap();
/// let code = render_problem(&stub).unwrap();
/// assert!(code.contains("1. Two Sum"));
/// assert!(code.contains("package main"));
/// ```
pub fn render_problem(stub: &ProblemStub) -> Result<String, TemplateError> {
    render_stub(stub.language.unwrap_or_default(), stub)
}
