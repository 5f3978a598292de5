//! Definition validation errors.

/// A reference in a [`VariantDefinition`](super::VariantDefinition) that does
/// not resolve against the bound table or the definition's own schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// A schema value maps to a style key the table does not have.
    #[error("variant '{axis}.{value}' references unknown style key '{key}'")]
    UnknownStyleKey {
        axis: String,
        value: String,
        key: String,
    },

    /// A base class name is not a key of the table.
    #[error("base class references unknown style key '{key}'")]
    UnknownBaseClass { key: String },

    /// A default is configured for an axis the schema does not declare.
    #[error("default variant configured for unknown axis '{axis}'")]
    UnknownDefaultAxis { axis: String },

    /// A default names a value its axis does not declare.
    #[error("default variant '{value}' is not a value of axis '{axis}'")]
    UnknownDefaultValue { axis: String, value: String },
}
