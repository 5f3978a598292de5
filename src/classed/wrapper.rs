//! The derived element wrapper.

use std::sync::Arc;

use crate::element::{Component, Element, NodeRef, Props, Target, CLASS_NAME};
use crate::variant::Resolver;

/// Prefix of every wrapper's display name.
pub const DISPLAY_NAME_PREFIX: &str = "Classed";

/// An element wrapper: resolves a class string per call and produces the
/// target element with it.
///
/// Created by [`Binder::derive`](crate::Binder::derive). Stateless and cheap
/// to clone.
///
/// # Example
///
/// ```rust
/// use classed::{bind, NodeRef, Props, StyleTable, VariantDefinition};
///
/// let table: StyleTable = [("red", "c-red"), ("green", "c-green"), ("base", "c-base")]
///     .into_iter()
///     .collect();
/// let button = bind(table)
///     .derive(
///         "button",
///         VariantDefinition::new()
///             .axis("tone", [("danger", "red"), ("ok", "green")])
///             .default_variant("tone", "ok")
///             .class_names(["base"]),
///     )
///     .unwrap();
///
/// let node_ref = NodeRef::new();
/// let el = button.render(
///     Props::new().set("tone", "danger").set("type", "submit").child("Delete"),
///     Some(node_ref.clone()),
/// );
///
/// assert_eq!(el.class_name(), Some("c-red c-base"));
/// assert_eq!(el.node_ref(), Some(&node_ref));
/// ```
#[derive(Debug, Clone)]
pub struct Classed {
    target: Target,
    resolver: Arc<Resolver>,
    display_name: Option<String>,
}

impl Classed {
    pub(crate) fn new(target: Target, resolver: Resolver) -> Self {
        let display_name = display_name_for(&target);
        Self {
            target,
            resolver: Arc::new(resolver),
            display_name,
        }
    }

    /// `Classed.<tag>` or `Classed.<component name>`; `None` for anonymous
    /// components.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Computes the class string for these props without building an element.
    pub fn class_name(&self, props: &Props) -> String {
        self.resolver.resolve(props)
    }

    /// Produces the target element.
    ///
    /// Every prop is forwarded, `className` is replaced by the resolved
    /// string and `node_ref` is forwarded unchanged.
    pub fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Element {
        let class_name = self.resolver.resolve(&props);
        let mut props = props;
        props.insert(CLASS_NAME, class_name);

        let element = Element::new(self.target.clone(), props);
        match node_ref {
            Some(node_ref) => element.with_ref(node_ref),
            None => element,
        }
    }

    /// Turns this wrapper into a target other wrappers can wrap.
    pub fn into_target(self) -> Target {
        Target::component(self)
    }
}

impl Component for Classed {
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Element {
        Classed::render(self, props, node_ref)
    }

    fn display_name(&self) -> Option<&str> {
        Classed::display_name(self)
    }
}

impl From<Classed> for Target {
    fn from(classed: Classed) -> Self {
        classed.into_target()
    }
}

fn display_name_for(target: &Target) -> Option<String> {
    target
        .name()
        .map(|name| format!("{}.{}", DISPLAY_NAME_PREFIX, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classed::bind;
    use crate::element::FnComponent;
    use crate::table::StyleTable;
    use crate::variant::VariantDefinition;

    fn table() -> StyleTable {
        [("big", "c-big"), ("green", "c-green")].into_iter().collect()
    }

    fn simple() -> VariantDefinition {
        VariantDefinition::new().class_names(["big", "green"])
    }

    #[test]
    fn test_tag_display_name() {
        let classed = bind(table()).derive("div", simple()).unwrap();
        assert_eq!(classed.display_name(), Some("Classed.div"));
    }

    #[test]
    fn test_named_component_display_name() {
        let card = FnComponent::new(|props, _| Element::new("section", props))
            .with_display_name("Card");
        let classed = bind(table())
            .derive(Target::component(card), simple())
            .unwrap();
        assert_eq!(classed.display_name(), Some("Classed.Card"));
    }

    #[test]
    fn test_anonymous_component_has_no_display_name() {
        let anonymous = FnComponent::new(|props, _| Element::new("section", props));
        let classed = bind(table())
            .derive(Target::component(anonymous), simple())
            .unwrap();
        assert_eq!(classed.display_name(), None);
    }

    #[test]
    fn test_wrapping_a_wrapper() {
        let binder = bind(table());
        let inner = binder.derive("div", simple()).unwrap();
        let outer = binder.derive(inner, VariantDefinition::new()).unwrap();
        assert_eq!(outer.display_name(), Some("Classed.Classed.div"));
    }

    #[test]
    fn test_render_replaces_class_name_and_forwards_props() {
        let classed = bind(table()).derive("div", simple()).unwrap();
        let el = classed.render(
            Props::new()
                .set("id", "hero")
                .class_name("extra")
                .child("Simple"),
            None,
        );

        assert_eq!(el.target().as_tag(), Some("div"));
        assert_eq!(el.class_name(), Some("c-big c-green extra"));
        assert_eq!(el.props().get("id").and_then(|v| v.as_str()), Some("hero"));
        assert_eq!(el.props().children().len(), 1);
        assert!(el.node_ref().is_none());
    }

    #[test]
    fn test_render_sets_empty_class_name() {
        let classed = bind(StyleTable::new())
            .derive("span", VariantDefinition::new())
            .unwrap();
        let el = classed.render(Props::new(), None);
        assert_eq!(el.class_name(), Some(""));
    }

    #[test]
    fn test_render_forwards_ref_unchanged() {
        let classed = bind(table()).derive("div", simple()).unwrap();
        let node_ref = NodeRef::new();
        let el = classed.render(Props::new(), Some(node_ref.clone()));
        assert_eq!(el.node_ref(), Some(&node_ref));
    }
}
