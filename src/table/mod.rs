//! Style tables: the opaque key to class-name mapping everything resolves through.
//!
//! This module provides:
//!
//! - [`StyleTable`]: An immutable mapping of logical style keys to class names
//! - [`TableError`]: Errors from loading a table out of JSON
//!
//! Tables are usually produced by an external build step (CSS modules emit
//! exactly this shape) and are trusted as-is.

mod error;
mod style_table;

pub use error::TableError;
pub use style_table::StyleTable;
