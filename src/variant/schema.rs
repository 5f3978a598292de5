//! Variant schema and default selection types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered variant axes, each mapping value names to style keys.
///
/// ```text
/// color: { harsh: red,  soft: green }
/// size:  { massive: big, tiny: small }
/// ```
///
/// Axis order is the order of [`VariantSchema::axis`] calls (or of the keys in
/// the JSON object it was deserialized from), never alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSchema {
    axes: IndexMap<String, IndexMap<String, String>>,
}

impl VariantSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an axis, returning an updated schema for chaining.
    ///
    /// Values are `(value name, style key)` pairs. Re-adding an existing
    /// axis replaces its values but keeps its original position.
    pub fn axis<I, V, K>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, K)>,
        V: Into<String>,
        K: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(v, k)| (v.into(), k.into()))
            .collect();
        self.axes.insert(name.into(), values);
        self
    }

    /// Iterates over `(axis name, values)` in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.axes.iter().map(|(name, values)| (name.as_str(), values))
    }

    /// Returns the value mapping of one axis.
    pub fn values(&self, axis: &str) -> Option<&IndexMap<String, String>> {
        self.axes.get(axis)
    }

    /// Looks up the style key for `axis = value`.
    pub fn style_key(&self, axis: &str, value: &str) -> Option<&str> {
        self.axes
            .get(axis)
            .and_then(|values| values.get(value))
            .map(String::as_str)
    }

    pub fn has_axis(&self, axis: &str) -> bool {
        self.axes.contains_key(axis)
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

/// Default value name per axis, used when a call omits that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultVariants {
    values: IndexMap<String, String>,
}

impl DefaultVariants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default value for an axis, returning the updated selection.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(axis.into(), value.into());
        self
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<A, V> FromIterator<(A, V)> for DefaultVariants
where
    A: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(a, v)| (a.into(), v.into()))
                .collect(),
        }
    }
}
