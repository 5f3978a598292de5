//! The immutable style table.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::TableError;
use crate::classed::{bind_with, Binder};
use crate::variant::Validation;

/// An immutable mapping from logical style key to opaque class name.
///
/// Keys are meaningful only within one table. Values are final class-name
/// strings and are never inspected. Iteration follows insertion order.
///
/// # Example
///
/// ```rust
/// use classed::StyleTable;
///
/// let table: StyleTable = [("red", "c-red"), ("big", "c-big")].into_iter().collect();
/// assert_eq!(table.get("red"), Some("c-red"));
/// assert!(!table.has("blue"));
///
/// // CSS modules emit the same shape as JSON
/// let table = StyleTable::from_json(r#"{ "base": "App_base__x1" }"#).unwrap();
/// assert_eq!(table.get("base"), Some("App_base__x1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    classes: IndexMap<String, String>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from a flat JSON object of strings.
    pub fn from_json(source: &str) -> Result<Self, TableError> {
        serde_json::from_str(source).map_err(|e| TableError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads and parses a table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&source).map_err(|e| TableError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Returns the class name for a style key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.classes.get(key).map(String::as_str)
    }

    /// Returns true if the key exists.
    pub fn has(&self, key: &str) -> bool {
        self.classes.contains_key(key)
    }

    /// Iterates over the style keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Iterates over `(key, class name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Binds this table with strict definition validation.
    ///
    /// Shorthand for [`crate::bind`].
    pub fn bind(self) -> Binder {
        bind_with(self, Validation::Strict)
    }
}

impl<K, V> FromIterator<(K, V)> for StyleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
