//! Binding a style table into a wrapper factory.

use std::sync::Arc;

use super::wrapper::Classed;
use crate::element::Target;
use crate::table::StyleTable;
use crate::variant::{DefinitionError, Resolver, Validation, VariantDefinition};

/// Binds a table with strict validation.
///
/// # Example
///
/// ```rust
/// use classed::{bind, Props, StyleTable, VariantDefinition};
///
/// let table: StyleTable = [("big", "c-big"), ("green", "c-green")].into_iter().collect();
/// let simple = bind(table)
///     .derive("div", VariantDefinition::new().class_names(["big", "green"]))
///     .unwrap();
///
/// assert_eq!(simple.class_name(&Props::new()), "c-big c-green");
/// assert_eq!(simple.display_name(), Some("Classed.div"));
/// ```
pub fn bind(table: StyleTable) -> Binder {
    bind_with(table, Validation::Strict)
}

/// Binds a table with an explicit validation mode.
pub fn bind_with(table: StyleTable, validation: Validation) -> Binder {
    Binder {
        table: Arc::new(table),
        validation,
    }
}

/// A wrapper factory scoped to one style table.
///
/// Cloning is cheap; every clone and every derived wrapper share the table.
#[derive(Debug, Clone)]
pub struct Binder {
    table: Arc<StyleTable>,
    validation: Validation,
}

impl Binder {
    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Derives a wrapper around `target`.
    ///
    /// # Errors
    ///
    /// In [`Validation::Strict`] mode, returns the first reference in
    /// `definition` that does not resolve. [`Validation::Compat`] never fails.
    pub fn derive(
        &self,
        target: impl Into<Target>,
        definition: VariantDefinition,
    ) -> Result<Classed, DefinitionError> {
        if self.validation == Validation::Strict {
            definition.validate(&self.table)?;
        }

        let target = target.into();
        let resolver = Resolver::new(self.table.clone(), definition, self.validation);
        let classed = Classed::new(target, resolver);
        log::debug!(
            "derived wrapper {}",
            classed.display_name().unwrap_or("<anonymous>")
        );
        Ok(classed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StyleTable {
        [("red", "c-red"), ("base", "c-base")].into_iter().collect()
    }

    #[test]
    fn test_strict_derive_rejects_bad_reference() {
        let result = bind(table()).derive("div", VariantDefinition::new().class_names(["nope"]));
        assert_eq!(
            result.err(),
            Some(DefinitionError::UnknownBaseClass { key: "nope".into() })
        );
    }

    #[test]
    fn test_compat_derive_accepts_bad_reference() {
        let binder = bind_with(table(), Validation::Compat);
        let classed = binder
            .derive("div", VariantDefinition::new().class_names(["nope", "base"]))
            .unwrap();
        assert_eq!(classed.class_name(&Default::default()), " c-base");
    }

    #[test]
    fn test_wrappers_share_the_table() {
        let binder = table().bind();
        let a = binder.derive("div", VariantDefinition::new()).unwrap();
        let b = binder.derive("span", VariantDefinition::new()).unwrap();
        assert!(std::ptr::eq(a.resolver().table(), b.resolver().table()));
        assert!(std::ptr::eq(a.resolver().table(), binder.table()));
    }

    #[test]
    fn test_default_validation_is_strict() {
        assert_eq!(bind(table()).validation(), Validation::Strict);
    }
}
