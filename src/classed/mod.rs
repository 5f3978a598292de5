//! Binding tables and deriving element wrappers.
//!
//! - [`bind`] / [`bind_with`]: Close over a [`StyleTable`](crate::StyleTable)
//! - [`Binder`]: The factory deriving wrappers from variant definitions
//! - [`Classed`]: A derived wrapper, itself a [`Component`](crate::Component)

mod binder;
mod wrapper;

pub use binder::{bind, bind_with, Binder};
pub use wrapper::{Classed, DISPLAY_NAME_PREFIX};
