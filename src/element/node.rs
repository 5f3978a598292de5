//! Elements, nodes, render targets and the component seam.

use std::sync::Arc;

use super::node_ref::NodeRef;
use super::props::{Props, CLASS_NAME};

/// A composite element type: something that renders props into an element.
///
/// [`Classed`](crate::Classed) implements this, so wrappers can wrap wrappers.
pub trait Component: Send + Sync {
    /// Renders the component, forwarding `node_ref` wherever it belongs.
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Element;

    /// Introspectable name, if the component has one.
    fn display_name(&self) -> Option<&str> {
        None
    }
}

/// A [`Component`] built from a closure.
///
/// ```rust
/// use classed::{Element, FnComponent, Component};
///
/// let card = FnComponent::new(|props, node_ref| {
///     let mut el = Element::new("section", props);
///     if let Some(r) = node_ref {
///         el = el.with_ref(r);
///     }
///     el
/// })
/// .with_display_name("Card");
///
/// assert_eq!(card.display_name(), Some("Card"));
/// ```
pub struct FnComponent<F> {
    render: F,
    display_name: Option<String>,
}

impl<F> FnComponent<F>
where
    F: Fn(Props, Option<NodeRef>) -> Element + Send + Sync,
{
    /// Creates an anonymous component.
    pub fn new(render: F) -> Self {
        Self {
            render,
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(Props, Option<NodeRef>) -> Element + Send + Sync,
{
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Element {
        (self.render)(props, node_ref)
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// What an element renders as: an intrinsic tag or a composite component.
#[derive(Clone)]
pub enum Target {
    Tag(String),
    Component(Arc<dyn Component>),
}

impl Target {
    /// Wraps a component value.
    pub fn component<C: Component + 'static>(component: C) -> Self {
        Target::Component(Arc::new(component))
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Target::Tag(tag) => Some(tag),
            Target::Component(_) => None,
        }
    }

    /// The tag itself, or the component's display name if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Target::Tag(tag) => Some(tag),
            Target::Component(component) => component.display_name(),
        }
    }
}

impl From<&str> for Target {
    fn from(tag: &str) -> Self {
        Target::Tag(tag.to_string())
    }
}

impl From<String> for Target {
    fn from(tag: String) -> Self {
        Target::Tag(tag)
    }
}

impl From<Arc<dyn Component>> for Target {
    fn from(component: Arc<dyn Component>) -> Self {
        Target::Component(component)
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Target::Tag(a), Target::Tag(b)) => a == b,
            (Target::Component(a), Target::Component(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Target::Component(component) => f
                .debug_tuple("Component")
                .field(&component.display_name())
                .finish(),
        }
    }
}

/// One element instance: a target, its props and an optional forwarded ref.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    target: Target,
    props: Props,
    node_ref: Option<NodeRef>,
}

impl Element {
    pub fn new(target: impl Into<Target>, props: Props) -> Self {
        Self {
            target: target.into(),
            props,
            node_ref: None,
        }
    }

    /// Attaches a forwarded ref, returning the updated element.
    pub fn with_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// The `className` property as a string, if set to one.
    pub fn class_name(&self) -> Option<&str> {
        self.props.get(CLASS_NAME).and_then(|v| v.as_str())
    }

    pub fn into_parts(self) -> (Target, Props, Option<NodeRef>) {
        (self.target, self.props, self.node_ref)
    }
}

/// A child node: either an element or text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passthrough(tag: &'static str) -> FnComponent<impl Fn(Props, Option<NodeRef>) -> Element> {
        FnComponent::new(move |props, _| Element::new(tag, props))
    }

    #[test]
    fn test_target_names() {
        assert_eq!(Target::from("div").name(), Some("div"));
        let named = Target::component(passthrough("section").with_display_name("Card"));
        assert_eq!(named.name(), Some("Card"));
        assert_eq!(named.as_tag(), None);
        let anonymous = Target::component(passthrough("section"));
        assert_eq!(anonymous.name(), None);
    }

    #[test]
    fn test_component_targets_compare_by_identity() {
        let shared: Arc<dyn Component> = Arc::new(passthrough("p"));
        let a = Target::from(shared.clone());
        let b = Target::from(shared);
        let c = Target::component(passthrough("p"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Target::from("p"));
    }

    #[test]
    fn test_fn_component_renders() {
        let component = passthrough("article");
        let el = component.render(Props::new().set("id", "x"), None);
        assert_eq!(el.target().as_tag(), Some("article"));
        assert_eq!(el.props().get("id").and_then(|v| v.as_str()), Some("x"));
    }

    #[test]
    fn test_element_class_name() {
        let el = Element::new("div", Props::new().class_name("a b"));
        assert_eq!(el.class_name(), Some("a b"));
        assert_eq!(Element::new("div", Props::new()).class_name(), None);
    }
}
