//! Variant definitions and the per-call resolution engine.
//!
//! This module provides:
//!
//! - [`VariantSchema`]: Ordered axes, each mapping value names to style keys
//! - [`VariantDefinition`]: Schema, default selection and base class list
//! - [`Resolver`]: The stateless function turning props into a class string
//! - [`Validation`]: Strict (validated) or compat (silent gaps) behaviour
//! - [`DefinitionError`]: Bad references found while validating a definition
//!
//! Axis order is significant: later classes win in the cascade, so the
//! resolver always emits axis classes in declaration order, then base
//! classes, then the caller override.

mod definition;
mod error;
mod resolve;
mod schema;

pub use definition::VariantDefinition;
pub use error::DefinitionError;
pub use resolve::{Resolver, Validation};
pub use schema::{DefaultVariants, VariantSchema};
