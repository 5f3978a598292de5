//! Reference-forwarding handles.

use std::sync::Arc;

use once_cell::sync::OnceCell;

/// Where a [`NodeRef`] ended up after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounted {
    /// Tag of the intrinsic element the ref is attached to.
    pub tag: String,
    /// Document-order index of that element among all rendered elements.
    pub position: usize,
}

/// A handle the host fills in with the element it is forwarded to.
///
/// Wrappers pass the handle through untouched; clones share the same slot,
/// so the caller's copy observes the attachment. A ref attaches at most once.
#[derive(Clone, Default)]
pub struct NodeRef {
    slot: Arc<OnceCell<Mounted>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mounted element, if the ref has been attached.
    pub fn get(&self) -> Option<&Mounted> {
        self.slot.get()
    }

    pub fn is_attached(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Attaches the ref. Returns false if it was already attached.
    pub(crate) fn attach(&self, mounted: Mounted) -> bool {
        self.slot.set(mounted).is_ok()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("mounted", &self.slot.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slot() {
        let node_ref = NodeRef::new();
        let forwarded = node_ref.clone();
        assert!(forwarded.attach(Mounted {
            tag: "div".into(),
            position: 0
        }));
        assert_eq!(node_ref.get().map(|m| m.tag.as_str()), Some("div"));
        assert_eq!(node_ref, forwarded);
    }

    #[test]
    fn test_attaches_once() {
        let node_ref = NodeRef::new();
        assert!(node_ref.attach(Mounted {
            tag: "div".into(),
            position: 0
        }));
        assert!(!node_ref.attach(Mounted {
            tag: "span".into(),
            position: 1
        }));
        assert_eq!(node_ref.get().map(|m| m.position), Some(0));
    }

    #[test]
    fn test_distinct_refs_are_not_equal() {
        assert_ne!(NodeRef::new(), NodeRef::new());
    }
}
