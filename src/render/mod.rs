//! Rendering element trees to markup.
//!
//! Output goes through a `minijinja` environment with HTML auto-escaping,
//! built once and shared by every render.

mod html;

pub use html::{render_html, RenderError, MAX_COMPONENT_DEPTH, VOID_TAGS};
