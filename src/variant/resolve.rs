//! Per-call class-name resolution.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::VariantDefinition;
use crate::element::Props;
use crate::table::StyleTable;

/// How definitions are checked and how unresolved lookups behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Definitions are validated when a wrapper is derived. At call time an
    /// axis that resolves to nothing is left out of the output.
    #[default]
    Strict,
    /// No validation. Every unresolved lookup contributes an empty segment
    /// to the joined string, matching how `undefined` entries join.
    Compat,
}

/// The stateless resolution function of one derived wrapper.
///
/// Holds the shared table and the definition; every call is a pure
/// function of those and the call-site props.
///
/// # Example
///
/// ```rust
/// use classed::{Props, Resolver, StyleTable, Validation, VariantDefinition};
/// use std::sync::Arc;
///
/// let table: StyleTable = [("red", "c-red"), ("base", "c-base")].into_iter().collect();
/// let def = VariantDefinition::new()
///     .axis("color", [("harsh", "red")])
///     .default_variant("color", "harsh")
///     .class_names(["base"]);
///
/// let resolver = Resolver::new(Arc::new(table), def, Validation::Strict);
/// assert_eq!(resolver.resolve(&Props::new()), "c-red c-base");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<StyleTable>,
    definition: VariantDefinition,
    validation: Validation,
}

impl Resolver {
    /// Creates a resolver without validating the definition.
    ///
    /// Use [`Binder::derive`](crate::Binder::derive) for validated wrappers.
    pub fn new(
        table: Arc<StyleTable>,
        definition: VariantDefinition,
        validation: Validation,
    ) -> Self {
        Self {
            table,
            definition,
            validation,
        }
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    pub fn definition(&self) -> &VariantDefinition {
        &self.definition
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Computes the class-name string for one call.
    ///
    /// Axis classes come first in schema order, then base classes in list
    /// order, then the caller's `className` override. Never fails.
    pub fn resolve(&self, props: &Props) -> String {
        self.segments(props).join(" ")
    }

    fn segments<'a>(&'a self, props: &'a Props) -> Vec<Cow<'a, str>> {
        let mut classes: Vec<Cow<'a, str>> = Vec::new();

        if let Some(schema) = self.definition.variants() {
            for (axis, values) in schema.axes() {
                let selected = props.selection(axis);
                let value = selected
                    .as_deref()
                    .or_else(|| self.definition.default_for(axis));
                let class = value
                    .and_then(|v| values.get(v))
                    .and_then(|key| self.table.get(key));

                match class {
                    Some(class) => classes.push(Cow::Borrowed(class)),
                    None => {
                        self.unresolved_axis(axis, selected.is_some(), value);
                        if self.validation == Validation::Compat {
                            classes.push(Cow::Borrowed(""));
                        }
                    }
                }
            }
        }

        if let Some(keys) = self.definition.base_classes() {
            for key in keys {
                match self.table.get(key) {
                    Some(class) => classes.push(Cow::Borrowed(class)),
                    None => {
                        log::debug!("base class '{}' has no entry in the style table", key);
                        if self.validation == Validation::Compat {
                            classes.push(Cow::Borrowed(""));
                        }
                    }
                }
            }
        }

        if let Some(extra) = props.override_class() {
            classes.push(extra);
        }

        classes
    }

    fn unresolved_axis(&self, axis: &str, selected: bool, value: Option<&str>) {
        match value {
            Some(value) if selected => {
                log::warn!("unknown value '{}' for variant axis '{}'", value, axis)
            }
            Some(value) => log::debug!(
                "default '{}' for variant axis '{}' does not resolve",
                value,
                axis
            ),
            None => log::debug!("no value or default for variant axis '{}'", axis),
        }
    }
}
