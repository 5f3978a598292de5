//! The host element model wrappers render into.
//!
//! - [`Props`]: Ordered call-site properties and children
//! - [`Element`], [`Node`]: The produced element tree
//! - [`Target`], [`Component`]: What an element renders as
//! - [`NodeRef`]: Reference-forwarding handle

mod node;
mod node_ref;
mod props;

pub use node::{Component, Element, FnComponent, Node, Target};
pub use node_ref::{Mounted, NodeRef};
pub use props::{is_truthy, PropValue, Props, CLASS_NAME};
pub(crate) use props::number_text;
