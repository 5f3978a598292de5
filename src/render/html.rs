//! HTML rendering of element trees.

use minijinja::{context, AutoEscape, Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::element::{number_text, Element, Mounted, Node, PropValue, Target, CLASS_NAME};

/// Maximum nesting of composite components expanded for one element.
pub const MAX_COMPONENT_DEPTH: usize = 64;

/// Tags written without a closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const ELEMENT_TEMPLATE: &str = "<{{ tag }}{% for attr in attrs %} {{ attr.name }}{% if attr.value is not none %}=\"{{ attr.value }}\"{% endif %}{% endfor %}>{% if not void %}{{ children }}</{{ tag }}>{% endif %}";

const TEXT_TEMPLATE: &str = "{{ text }}";

static HTML_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("element.html", ELEMENT_TEMPLATE)
        .expect("element template is valid");
    env.add_template("text.html", TEXT_TEMPLATE)
        .expect("text template is valid");
    env
});

/// Error returned when an element tree cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template evaluation failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// A tag name that cannot be written into markup as-is.
    #[error("invalid tag name '{tag}'")]
    InvalidTag { tag: String },

    /// Composite components nested deeper than [`MAX_COMPONENT_DEPTH`].
    #[error("component nesting exceeded {limit} levels at {name}")]
    DepthExceeded { limit: usize, name: String },
}

#[derive(Serialize)]
struct HtmlAttr {
    name: String,
    value: Option<String>,
}

/// Renders an element tree to HTML.
///
/// Composite components are expanded by calling them, at most
/// [`MAX_COMPONENT_DEPTH`] levels for any one element. `className` is
/// written as `class`. Properties whose names are not valid attribute names
/// are dropped with a warning; an invalid tag name is an error. Forwarded [`NodeRef`](crate::NodeRef)s are attached
/// to the intrinsic element they land on.
///
/// # Example
///
/// ```rust
/// use classed::{bind, render_html, Props, StyleTable, VariantDefinition};
///
/// let table: StyleTable = [("big", "c-big"), ("green", "c-green")].into_iter().collect();
/// let simple = bind(table)
///     .derive("div", VariantDefinition::new().class_names(["big", "green"]))
///     .unwrap();
///
/// let html = render_html(&simple.render(Props::new().child("Simple"), None)).unwrap();
/// assert_eq!(html, r#"<div class="c-big c-green">Simple</div>"#);
/// ```
pub fn render_html(element: &Element) -> Result<String, RenderError> {
    let mut position = 0;
    render_element(element.clone(), 0, &mut position)
}

fn render_element(
    element: Element,
    depth: usize,
    position: &mut usize,
) -> Result<String, RenderError> {
    let (target, props, node_ref) = element.into_parts();

    let tag = match target {
        Target::Tag(tag) => tag,
        Target::Component(component) => {
            if depth >= MAX_COMPONENT_DEPTH {
                return Err(RenderError::DepthExceeded {
                    limit: MAX_COMPONENT_DEPTH,
                    name: component
                        .display_name()
                        .unwrap_or("<anonymous>")
                        .to_string(),
                });
            }
            let expanded = component.render(props, node_ref);
            return render_element(expanded, depth + 1, position);
        }
    };

    if !is_markup_name(&tag) {
        return Err(RenderError::InvalidTag { tag });
    }

    let index = *position;
    *position += 1;
    if let Some(node_ref) = node_ref {
        let attached = node_ref.attach(Mounted {
            tag: tag.clone(),
            position: index,
        });
        if !attached {
            log::debug!("ref already attached, ignoring second attachment to <{}>", tag);
        }
    }

    let (values, children) = props.into_parts();
    let attrs: Vec<HtmlAttr> = values
        .into_iter()
        .filter_map(|(name, value)| attribute(name, value))
        .collect();

    let mut inner = String::new();
    for child in children {
        match child {
            Node::Text(text) => {
                let tmpl = HTML_ENV.get_template("text.html")?;
                inner.push_str(&tmpl.render(context! { text => text })?);
            }
            Node::Element(child) => inner.push_str(&render_element(child, 0, position)?),
        }
    }

    let void = VOID_TAGS.contains(&tag.as_str());
    let html = HTML_ENV.get_template("element.html")?.render(context! {
        tag => tag,
        attrs => attrs,
        void => void,
        children => Value::from_safe_string(inner),
    })?;
    Ok(html)
}

/// Tag and attribute names: non-empty, and free of whitespace, quotes,
/// `<`, `>`, `/`, `=` and control characters.
fn is_markup_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

fn attribute(name: String, value: PropValue) -> Option<HtmlAttr> {
    let name = if name == CLASS_NAME {
        "class".to_string()
    } else if is_markup_name(&name) {
        name
    } else {
        log::warn!("dropping property '{}': not a valid attribute name", name);
        return None;
    };
    let value = match value {
        PropValue::Null | PropValue::Bool(false) => return None,
        PropValue::Bool(true) => None,
        PropValue::String(s) => Some(s),
        PropValue::Number(n) => Some(number_text(&n)),
        other => Some(other.to_string()),
    };
    Some(HtmlAttr { name, value })
}
