//! Variant definitions and their validation against a style table.

use serde::{Deserialize, Serialize};

use super::error::DefinitionError;
use super::schema::{DefaultVariants, VariantSchema};
use crate::table::StyleTable;

/// Everything needed to derive one wrapper: optional schema, optional
/// defaults, optional base class list.
///
/// # Example
///
/// ```rust
/// use classed::VariantDefinition;
///
/// let def = VariantDefinition::new()
///     .axis("color", [("harsh", "red"), ("soft", "green")])
///     .axis("size", [("massive", "big"), ("tiny", "small")])
///     .default_variant("color", "harsh")
///     .default_variant("size", "tiny")
///     .class_names(["base"]);
///
/// assert_eq!(def.default_for("size"), Some("tiny"));
/// ```
///
/// Definitions also deserialize from the JSON shape used by manifests:
///
/// ```rust
/// use classed::VariantDefinition;
///
/// let def: VariantDefinition = serde_json::from_str(r#"{
///     "variants": { "color": { "harsh": "red" } },
///     "defaultVariants": { "color": "harsh" },
///     "classNames": ["base"]
/// }"#).unwrap();
/// assert!(def.variants().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variants: Option<VariantSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_variants: Option<DefaultVariants>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_names: Option<Vec<String>>,
}

impl VariantDefinition {
    /// Creates an empty definition: no variants, no defaults, no base classes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variants(&self) -> Option<&VariantSchema> {
        self.variants.as_ref()
    }

    /// Sets the schema, returning the updated definition.
    pub fn with_variants(mut self, schema: VariantSchema) -> Self {
        self.variants = Some(schema);
        self
    }

    /// Appends one axis to the schema, creating the schema if needed.
    pub fn axis<I, V, K>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, K)>,
        V: Into<String>,
        K: Into<String>,
    {
        let schema = self.variants.take().unwrap_or_default();
        self.variants = Some(schema.axis(name, values));
        self
    }

    pub fn default_variants(&self) -> Option<&DefaultVariants> {
        self.default_variants.as_ref()
    }

    /// Sets all defaults at once.
    pub fn with_default_variants(mut self, defaults: DefaultVariants) -> Self {
        self.default_variants = Some(defaults);
        self
    }

    /// Sets the default value name for one axis.
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        let defaults = self.default_variants.take().unwrap_or_default();
        self.default_variants = Some(defaults.set(axis, value));
        self
    }

    /// Returns the configured default value name for an axis.
    pub fn default_for(&self, axis: &str) -> Option<&str> {
        self.default_variants.as_ref().and_then(|d| d.get(axis))
    }

    pub fn base_classes(&self) -> Option<&[String]> {
        self.class_names.as_deref()
    }

    /// Sets the base class list (style keys applied on every call).
    pub fn class_names<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_names = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Collects every bad reference in this definition.
    ///
    /// Problems are reported in definition order: schema entries, then
    /// defaults, then base classes.
    pub fn problems(&self, table: &StyleTable) -> Vec<DefinitionError> {
        let mut problems = Vec::new();

        if let Some(schema) = &self.variants {
            for (axis, values) in schema.axes() {
                for (value, key) in values {
                    if !table.has(key) {
                        problems.push(DefinitionError::UnknownStyleKey {
                            axis: axis.to_string(),
                            value: value.clone(),
                            key: key.clone(),
                        });
                    }
                }
            }
        }

        if let Some(defaults) = &self.default_variants {
            for (axis, value) in defaults.iter() {
                match self.variants.as_ref().and_then(|s| s.values(axis)) {
                    None => problems.push(DefinitionError::UnknownDefaultAxis {
                        axis: axis.to_string(),
                    }),
                    Some(values) if !values.contains_key(value) => {
                        problems.push(DefinitionError::UnknownDefaultValue {
                            axis: axis.to_string(),
                            value: value.to_string(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        if let Some(keys) = &self.class_names {
            for key in keys {
                if !table.has(key) {
                    problems.push(DefinitionError::UnknownBaseClass { key: key.clone() });
                }
            }
        }

        problems
    }

    /// Validates this definition against a table, failing on the first
    /// bad reference.
    pub fn validate(&self, table: &StyleTable) -> Result<(), DefinitionError> {
        match self.problems(table).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
