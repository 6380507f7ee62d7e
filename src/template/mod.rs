//! Template system for solution skeletons
//!
//! This module holds the loaded [`Template`] type, the resolver that performs
//! substitution, the built-in skeletons and a registry to keep templates by name.
//!
//! # Example
//!
//! ```text
//! class Solution:
//!     def {FUNCTION_NAME}(self, {FUNCTION_PARAMS}) -> {RETURN_TYPE}:
//! ```
//!
//! Rendering with `FUNCTION_NAME = "twoSum"` fills the first marker and leaves the
//! other two untouched.

pub mod builtin;
mod definition;
mod registry;
mod resolver;

pub use builtin::{Language, UnsupportedLanguage};
pub use definition::Template;
pub use registry::TemplateRegistry;
pub use resolver::{resolve_placeholders, ResolutionStats};
