//! Built-in solution skeletons embedded at compile time.
//!
//! The skeleton files under `templates/` are compiled into the library via
//! [`include_str!`], so they are available regardless of the runtime filesystem
//! layout. When adding a skeleton, add a [`Language`] variant and update
//! [`builtin_templates`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TemplateError;
use crate::template::Template;

/// The total number of built-in skeletons
pub const BUILTIN_TEMPLATE_COUNT: usize = 10;

const PYTHON_SKELETON: &str = include_str!("../../templates/solution.py.tmpl");
const TYPESCRIPT_SKELETON: &str = include_str!("../../templates/solution.ts.tmpl");
const JAVASCRIPT_SKELETON: &str = include_str!("../../templates/solution.js.tmpl");
const JAVA_SKELETON: &str = include_str!("../../templates/solution.java.tmpl");
const CPP_SKELETON: &str = include_str!("../../templates/solution.cpp.tmpl");
const C_SKELETON: &str = include_str!("../../templates/solution.c.tmpl");
const CSHARP_SKELETON: &str = include_str!("../../templates/solution.cs.tmpl");
const GO_SKELETON: &str = include_str!("../../templates/solution.go.tmpl");
const RUBY_SKELETON: &str = include_str!("../../templates/solution.rb.tmpl");
const PHP_SKELETON: &str = include_str!("../../templates/solution.php.tmpl");

/// Target language of a solution skeleton
///
/// Python is the default: its skeleton is the complete one, with docstring
/// parameters and two example runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    TypeScript,
    JavaScript,
    Java,
    Cpp,
    C,
    CSharp,
    Go,
    Ruby,
    Php,
}

impl Language {
    pub const ALL: [Language; BUILTIN_TEMPLATE_COUNT] = [
        Language::Python,
        Language::TypeScript,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
        Language::C,
        Language::CSharp,
        Language::Go,
        Language::Ruby,
        Language::Php,
    ];

    /// File extension for a solution file, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "cs",
            Language::Go => "go",
            Language::Ruby => "rb",
            Language::Php => "php",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
        }
    }

    /// Registry name of the built-in skeleton
    pub fn template_name(self) -> &'static str {
        match self {
            Language::Python => "solution/python",
            Language::TypeScript => "solution/typescript",
            Language::JavaScript => "solution/javascript",
            Language::Java => "solution/java",
            Language::Cpp => "solution/cpp",
            Language::C => "solution/c",
            Language::CSharp => "solution/csharp",
            Language::Go => "solution/go",
            Language::Ruby => "solution/ruby",
            Language::Php => "solution/php",
        }
    }

    /// Raw skeleton text
    pub fn skeleton(self) -> &'static str {
        match self {
            Language::Python => PYTHON_SKELETON,
            Language::TypeScript => TYPESCRIPT_SKELETON,
            Language::JavaScript => JAVASCRIPT_SKELETON,
            Language::Java => JAVA_SKELETON,
            Language::Cpp => CPP_SKELETON,
            Language::C => C_SKELETON,
            Language::CSharp => CSHARP_SKELETON,
            Language::Go => GO_SKELETON,
            Language::Ruby => RUBY_SKELETON,
            Language::Php => PHP_SKELETON,
        }
    }

    /// Parse the built-in skeleton for this language
    pub fn template(self) -> Result<Template, TemplateError> {
        Template::parse(self.template_name(), self.skeleton())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "javascript" | "js" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            "c" => Ok(Language::C),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "go" | "golang" => Ok(Language::Go),
            "ruby" | "rb" => Ok(Language::Ruby),
            "php" => Ok(Language::Php),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Returns `(name, source)` for every built-in skeleton
///
/// # Examples
///
/// ```
/// use solution_stub::template::builtin::builtin_templates;
///
/// let templates = builtin_templates();
/// assert_eq!(templates.len(), 10);
/// assert!(templates.iter().any(|(name, _)| *name == "solution/python"));
/// ```
pub fn builtin_templates() -> Vec<(&'static str, &'static str)> {
    Language::ALL
        .iter()
        .map(|lang| (lang.template_name(), lang.skeleton()))
        .collect()
}
