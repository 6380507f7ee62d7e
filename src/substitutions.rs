//! Placeholder substitution sets
//!
//! A [`Substitutions`] value maps placeholder names to replacement text. It can be
//! built in code or loaded from a TOML document with a `[placeholders]` table and
//! an optional `[metadata]` table:
//!
//! ```toml
//! [metadata]
//! name = "two-sum"
//! description = "Values for problem 1"
//!
//! [placeholders]
//! FUNCTION_NAME = "twoSum"
//! RETURN_TYPE = "List[int]"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

/// Mapping from placeholder name to replacement text
///
/// Keys are kept sorted so iteration and diagnostics are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    /// Optional name from the `[metadata]` table
    pub name: Option<String>,
    /// Optional description from the `[metadata]` table
    pub description: Option<String>,
    values: BTreeMap<String, String>,
}

/// TOML structure for deserializing substitution files
#[derive(Deserialize)]
struct TomlSubstitutions {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    placeholders: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load substitutions from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load substitutions from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let parsed: TomlSubstitutions = toml::from_str(content)?;

        Ok(Self {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            values: parsed.placeholders,
        })
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Placeholder names, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Substitutions {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl From<HashMap<String, String>> for Substitutions {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Substitutions {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }
}
