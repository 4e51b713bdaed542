use super::ComponentId;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub(crate) type Handler = Rc<dyn Fn(&Event)>;

struct Binding {
    owner: ComponentId,
    handler: Handler,
}

// Keep-alive registry for closure callbacks. Each entry holds the only strong
// reference to its handler (and through it, to the owning component) until
// the listening node is released.
#[derive(Default)]
pub(crate) struct BindingRegistry {
    bindings: HashMap<(NodeId, EventKind), Binding>,
}

impl BindingRegistry {
    pub(crate) fn bind(&mut self, owner: &ComponentId, node: NodeId, kind: EventKind, handler: Handler) {
        let previous = self.bindings.insert(
            (node, kind),
            Binding {
                owner: owner.clone(),
                handler,
            },
        );
        if let Some(previous) = previous {
            log::debug!(
                "{owner} replaced the {kind} listener of {} on {node:?}",
                previous.owner
            );
        }
    }

    pub(crate) fn handler(&self, node: NodeId, kind: EventKind) -> Option<Handler> {
        self.bindings
            .get(&(node, kind))
            .map(|binding| binding.handler.clone())
    }

    /// Drop every binding whose listening node is in `nodes`.
    pub(crate) fn release(&mut self, nodes: &[NodeId]) -> usize {
        if self.bindings.is_empty() {
            return 0;
        }
        let nodes: HashSet<NodeId> = nodes.iter().copied().collect();
        let before = self.bindings.len();
        self.bindings.retain(|(node, _), _| !nodes.contains(node));
        before - self.bindings.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    pub(crate) fn is_bound(&self, owner: &ComponentId) -> bool {
        self.bindings.values().any(|binding| &binding.owner == owner)
    }

    pub(crate) fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn release_drops_only_listed_nodes() {
        let mut doc = Document::new();
        let a = doc.create_element("button");
        let b = doc.create_element("button");
        let owner = ComponentId::fixed("dash-1");
        let mut registry = BindingRegistry::default();
        registry.bind(&owner, a, EventKind::Click, Rc::new(|_| {}));
        registry.bind(&owner, b, EventKind::Click, Rc::new(|_| {}));

        assert_eq!(registry.release(&[a]), 1);
        assert!(registry.handler(a, EventKind::Click).is_none());
        assert!(registry.handler(b, EventKind::Click).is_some());
        assert!(registry.is_bound(&owner));
    }

    #[test]
    fn one_listener_per_node_and_kind() {
        let mut doc = Document::new();
        let node = doc.create_element("input");
        let owner = ComponentId::fixed("dash-1");
        let mut registry = BindingRegistry::default();
        registry.bind(&owner, node, EventKind::Input, Rc::new(|_| {}));
        registry.bind(&owner, node, EventKind::Input, Rc::new(|_| {}));
        registry.bind(&owner, node, EventKind::Change, Rc::new(|_| {}));
        assert_eq!(registry.len(), 2);
    }
}
