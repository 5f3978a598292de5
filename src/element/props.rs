//! Call-site properties.

use std::borrow::Cow;

use indexmap::IndexMap;

use super::node::Node;

/// The value of a single property. Any JSON value is accepted.
pub type PropValue = serde_json::Value;

/// Name of the property carrying the caller's class-name override.
pub const CLASS_NAME: &str = "className";

/// Ordered call-site properties plus child nodes.
///
/// Variant selections travel as ordinary properties, one per axis name.
/// The `className` property is the caller override.
///
/// # Example
///
/// ```rust
/// use classed::Props;
///
/// let props = Props::new()
///     .set("size", "massive")
///     .set("id", "hero")
///     .class_name("extra")
///     .child("Massive Harsh");
///
/// assert_eq!(props.selection("size").as_deref(), Some("massive"));
/// assert_eq!(props.override_class().as_deref(), Some("extra"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: IndexMap<String, PropValue>,
    children: Vec<Node>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated props for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets the `className` override.
    pub fn class_name(self, class_name: impl Into<String>) -> Self {
        self.set(CLASS_NAME, class_name.into())
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Inserts a property in place; an existing property keeps its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over `(name, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }

    /// Returns the selected value name for a variant axis.
    ///
    /// Absent and falsy properties yield `None`, so the caller falls back
    /// to the axis default.
    pub fn selection(&self, axis: &str) -> Option<Cow<'_, str>> {
        self.values.get(axis).and_then(coerce)
    }

    /// Returns the `className` override if it is set and truthy.
    pub fn override_class(&self) -> Option<Cow<'_, str>> {
        self.selection(CLASS_NAME)
    }

    pub(crate) fn into_parts(self) -> (IndexMap<String, PropValue>, Vec<Node>) {
        (self.values, self.children)
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            children: Vec::new(),
        }
    }
}

/// Host truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &PropValue) -> bool {
    match value {
        PropValue::Null => false,
        PropValue::Bool(b) => *b,
        PropValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        PropValue::String(s) => !s.is_empty(),
        PropValue::Array(_) | PropValue::Object(_) => true,
    }
}

/// Coerces a truthy value to the string used as a lookup key.
fn coerce(value: &PropValue) -> Option<Cow<'_, str>> {
    if !is_truthy(value) {
        return None;
    }
    Some(match value {
        PropValue::String(s) => Cow::Borrowed(s.as_str()),
        PropValue::Number(n) => Cow::Owned(number_text(n)),
        PropValue::Bool(_) => Cow::Borrowed("true"),
        other => Cow::Owned(other.to_string()),
    })
}

/// Writes a number the way the host does: integral floats drop the `.0`.
pub(crate) fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}
