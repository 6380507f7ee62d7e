//! Template registry for storing and retrieving named templates

use std::collections::HashMap;

use crate::error::TemplateError;
use crate::substitutions::Substitutions;
use crate::template::builtin::{builtin_templates, Language};
use crate::template::Template;
use crate::RenderOptions;

/// Registry of templates keyed by name
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in skeleton
    pub fn with_builtin_templates() -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        for (name, source) in builtin_templates() {
            registry.register(Template::parse(name, source)?)?;
        }
        Ok(registry)
    }

    /// Register an already parsed template
    pub fn register(&mut self, template: Template) -> Result<(), TemplateError> {
        if self.templates.contains_key(template.name()) {
            return Err(TemplateError::Duplicate {
                name: template.name().to_string(),
            });
        }
        self.templates.insert(template.name().to_string(), template);
        Ok(())
    }

    /// Parse and register template text
    pub fn register_source(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), TemplateError> {
        self.register(Template::parse(name, source)?)
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// The built-in skeleton for a language, if registered
    pub fn for_language(&self, language: Language) -> Option<&Template> {
        self.get(language.template_name())
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// All template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render a named template
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` for an unknown name, or
    /// `TemplateError::UnknownPlaceholder` in strict mode.
    pub fn render(
        &self,
        name: &str,
        substitutions: &Substitutions,
        options: &RenderOptions,
    ) -> Result<String, TemplateError> {
        self.get(name)
            .ok_or_else(|| TemplateError::NotFound {
                name: name.to_string(),
            })?
            .render_with_options(substitutions, options)
    }
}
