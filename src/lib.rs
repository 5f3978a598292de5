//! # Classed - Variant-Driven Class Names
//!
//! `classed` composes class-name strings from a style table, a set of named
//! variant axes and the values a caller selects, and attaches the result to
//! an element wrapper.
//!
//! ## Core Concepts
//!
//! - [`StyleTable`]: Opaque style key to class-name mapping (e.g. CSS modules output)
//! - [`VariantDefinition`]: Variant axes, default selection and base class list
//! - [`bind`]: Closes over a table and returns a [`Binder`]
//! - [`Binder::derive`]: Produces a [`Classed`] wrapper around a tag or component
//! - [`Classed::render`]: Resolves the class string and produces an [`Element`]
//! - [`render_html`]: Writes an element tree as HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use classed::{bind, Props, StyleTable, VariantDefinition};
//!
//! let style = StyleTable::from_json(r#"{
//!     "red": "c-red", "green": "c-green",
//!     "big": "c-big", "small": "c-small",
//!     "base": "c-base"
//! }"#).unwrap();
//!
//! let boxed = bind(style)
//!     .derive(
//!         "div",
//!         VariantDefinition::new()
//!             .axis("color", [("harsh", "red"), ("soft", "green")])
//!             .axis("size", [("massive", "big"), ("tiny", "small")])
//!             .default_variant("color", "harsh")
//!             .default_variant("size", "tiny")
//!             .class_names(["base"]),
//!     )
//!     .unwrap();
//!
//! assert_eq!(boxed.class_name(&Props::new()), "c-red c-small c-base");
//! assert_eq!(
//!     boxed.class_name(&Props::new().set("size", "tiny").set("color", "soft")),
//!     "c-green c-small c-base"
//! );
//! assert_eq!(
//!     boxed.class_name(&Props::new().class_name("extra")),
//!     "c-red c-small c-base extra"
//! );
//! ```
//!
//! ## Resolution Order
//!
//! Classes are emitted as: one class per variant axis in declaration order,
//! then the base class list in order, then the caller's `className`. Later
//! classes win in the cascade; nothing is deduplicated or reordered.
//!
//! ## Validation
//!
//! By default ([`Validation::Strict`]) [`Binder::derive`] checks every style
//! key, default axis and default value against the table and returns a
//! [`DefinitionError`] naming the first bad reference. [`Validation::Compat`]
//! skips the check; unresolved lookups then show up as empty segments in the
//! joined string. Resolution itself never fails in either mode.

pub mod classed;
pub mod element;
pub mod manifest;
pub mod render;
pub mod table;
pub mod variant;

// Binder and wrapper
pub use classed::{bind, bind_with, Binder, Classed, DISPLAY_NAME_PREFIX};

// Element model
pub use element::{
    is_truthy, Component, Element, FnComponent, Mounted, Node, NodeRef, PropValue, Props,
    Target, CLASS_NAME,
};

// Manifest
pub use manifest::{ComponentSpec, Library, Manifest, ManifestError};

// Rendering
pub use render::{render_html, RenderError};

// Style tables
pub use table::{StyleTable, TableError};

// Variants
pub use variant::{
    DefaultVariants, DefinitionError, Resolver, Validation, VariantDefinition, VariantSchema,
};
