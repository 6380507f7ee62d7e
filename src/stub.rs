//! Typed description of one exercise problem
//!
//! [`ProblemStub`] names each of the well-known skeleton placeholders as a field,
//! so callers do not have to spell placeholder keys by hand. It can also be read
//! from a TOML problem file:
//!
//! ```toml
//! id = "1"
//! title = "Two Sum"
//! function_name = "twoSum"
//! function_params = "nums: List[int], target: int"
//!
//! [[examples]]
//! input = "[2, 7, 11, 15], 9"
//! output = "[0, 1]"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::substitutions::Substitutions;
use crate::template::Language;

pub const PROBLEM_ID: &str = "PROBLEM_ID";
pub const PROBLEM_TITLE: &str = "PROBLEM_TITLE";
pub const SHORT_DESCRIPTION: &str = "SHORT_DESCRIPTION";
pub const FUNCTION_NAME: &str = "FUNCTION_NAME";
pub const FUNCTION_PARAMS: &str = "FUNCTION_PARAMS";
pub const PARAM_NAME: &str = "PARAM_NAME";
pub const PARAM_TYPE: &str = "PARAM_TYPE";
pub const PARAM_DESCRIPTION: &str = "PARAM_DESCRIPTION";
pub const RETURN_TYPE: &str = "RETURN_TYPE";
pub const RETURN_DESCRIPTION: &str = "RETURN_DESCRIPTION";

/// One example invocation shown in the skeleton's self-test block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
}

/// Values for the built-in skeleton placeholders
///
/// Unset fields are left out of [`to_substitutions`](Self::to_substitutions), so
/// their markers pass through rendering untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProblemStub {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<Language>,
    pub function_name: Option<String>,
    pub function_params: Option<String>,
    pub param_name: Option<String>,
    pub param_type: Option<String>,
    pub param_description: Option<String>,
    pub return_type: Option<String>,
    pub return_description: Option<String>,
    /// Numbered from 1 as `EXAMPLE_INPUT_n` / `EXAMPLE_OUTPUT_n`
    pub examples: Vec<Example>,
}

impl ProblemStub {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Load a problem description from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a problem description from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the function name and its full parameter list
    pub fn with_function(mut self, name: impl Into<String>, params: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self.function_params = Some(params.into());
        self
    }

    /// Describe the documented parameter
    pub fn with_param(
        mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.param_name = Some(name.into());
        self.param_type = Some(ty.into());
        self.param_description = Some(description.into());
        self
    }

    pub fn with_return(mut self, ty: impl Into<String>, description: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self.return_description = Some(description.into());
        self
    }

    pub fn with_example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push(Example {
            input: input.into(),
            output: output.into(),
        });
        self
    }

    /// Directory-style name: id zero-padded to four digits, then the title
    ///
    /// Falls back to `Problem-<id>` when no title is set. `None` without an id.
    ///
    /// ```
    /// use solution_stub::ProblemStub;
    ///
    /// assert_eq!(ProblemStub::new("1", "Two-Sum").slug().as_deref(), Some("0001-Two-Sum"));
    /// ```
    pub fn slug(&self) -> Option<String> {
        let id = self.id.as_deref()?;
        let title = match self.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("Problem-{}", id),
        };
        Some(format!("{:0>4}-{}", id, title))
    }

    /// Placeholder values for every field that is set
    pub fn to_substitutions(&self) -> Substitutions {
        let fields = [
            (PROBLEM_ID, &self.id),
            (PROBLEM_TITLE, &self.title),
            (SHORT_DESCRIPTION, &self.description),
            (FUNCTION_NAME, &self.function_name),
            (FUNCTION_PARAMS, &self.function_params),
            (PARAM_NAME, &self.param_name),
            (PARAM_TYPE, &self.param_type),
            (PARAM_DESCRIPTION, &self.param_description),
            (RETURN_TYPE, &self.return_type),
            (RETURN_DESCRIPTION, &self.return_description),
        ];

        let mut subs: Substitutions = fields
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
            .collect();

        for (i, example) in self.examples.iter().enumerate() {
            subs.insert(format!("EXAMPLE_INPUT_{}", i + 1), example.input.as_str());
            subs.insert(format!("EXAMPLE_OUTPUT_{}", i + 1), example.output.as_str());
        }
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_substitutions_skips_unset_fields() {
        let stub = ProblemStub::new("1", "Two Sum").with_function("twoSum", "nums, target");
        let subs = stub.to_substitutions();
        let keys: Vec<&str> = subs.keys().collect();
        assert_eq!(
            keys,
            vec!["FUNCTION_NAME", "FUNCTION_PARAMS", "PROBLEM_ID", "PROBLEM_TITLE"]
        );
    }

    #[test]
    fn test_examples_are_numbered_from_one() {
        let stub = ProblemStub::default()
            .with_example("[2,7,11,15], 9", "[0,1]")
            .with_example("[3,2,4], 6", "[1,2]");
        let subs = stub.to_substitutions();
        assert_eq!(subs.get("EXAMPLE_INPUT_1"), Some("[2,7,11,15], 9"));
        assert_eq!(subs.get("EXAMPLE_OUTPUT_2"), Some("[1,2]"));
        assert_eq!(subs.len(), 4);
    }

    #[test]
    fn test_slug() {
        assert_eq!(
            ProblemStub::new("42", "Trapping-Rain-Water").slug().as_deref(),
            Some("0042-Trapping-Rain-Water")
        );
        assert_eq!(
            ProblemStub::new("7", "").slug().as_deref(),
            Some("0007-Problem-7")
        );
        assert_eq!(
            ProblemStub::new("12345", "Long").slug().as_deref(),
            Some("12345-Long")
        );
        assert_eq!(ProblemStub::default().slug(), None);
    }

    #[test]
    fn test_parse_toml_problem() {
        let toml_str = r#"
id = "1"
title = "Two Sum"
language = "python"
function_name = "twoSum"
return_type = "List[int]"

[[examples]]
input = "[2, 7, 11, 15], 9"
output = "[0, 1]"
"#;
        let stub = ProblemStub::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(stub.language, Some(Language::Python));
        assert_eq!(stub.function_name.as_deref(), Some("twoSum"));
        assert_eq!(stub.examples.len(), 1);
        assert_eq!(stub.description, None);
    }

    #[test]
    fn test_unknown_toml_field_is_rejected() {
        let result = ProblemStub::from_toml_str("id = \"1\"\nfuncton_name = \"typo\"\n");
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problem.toml");
        std::fs::write(&path, "id = \"3\"\nlanguage = \"typescript\"\n").unwrap();
        let stub = ProblemStub::from_file(&path).unwrap();
        assert_eq!(stub.id.as_deref(), Some("3"));
        assert_eq!(stub.language, Some(Language::TypeScript));
    }
}
