// Component base
// Shared element wrapper, the Component trait and callback binding

use crate::dom::{Document, NodeId};
use crate::error::{Result, UiError};
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::{ComponentId, Diagnostic, Handler, Ui};
use std::rc::Rc;

/// One owned element: the handle every component wraps.
#[derive(Clone, Debug)]
pub struct ComponentBase {
    ui: Ui,
    id: ComponentId,
    node: NodeId,
}

impl ComponentBase {
    /// Allocate a fresh id and a detached `<tag>` carrying it.
    pub fn new(ui: &Ui, tag: &str) -> Self {
        let id = ui.allocate_id();
        let node = ui.with_document_mut(|doc| {
            let node = doc.create_element(tag);
            doc.set_attribute(node, "id", id.as_str());
            node
        });
        log::debug!("created <{tag}> {id}");
        Self {
            ui: ui.clone(),
            id,
            node,
        }
    }

    pub(crate) fn from_parts(ui: Ui, id: ComponentId, node: NodeId) -> Self {
        Self { ui, id, node }
    }
}

pub trait Component {
    fn base(&self) -> &ComponentBase;

    fn id(&self) -> &ComponentId {
        &self.base().id
    }

    fn node(&self) -> NodeId {
        self.base().node
    }

    fn ui(&self) -> &Ui {
        &self.base().ui
    }

    /// Append this element as the last child of `parent`.
    fn add_to(&self, parent: NodeId) {
        let node = self.node();
        self.ui().with_document_mut(|doc| doc.append_child(parent, node));
    }

    /// Append to the attached element with the given id.
    fn add_to_id(&self, parent_id: &str) -> Result<()> {
        let parent = self
            .ui()
            .get_element_by_id(parent_id)
            .ok_or_else(|| UiError::ElementNotFound(parent_id.to_string()))?;
        self.add_to(parent);
        Ok(())
    }

    /// Overwrite the whole class attribute.
    fn set_class(&self, class: &str) {
        let node = self.node();
        self.ui().with_document_mut(|doc| doc.set_class(node, class));
    }

    fn class_name(&self) -> Option<String> {
        let node = self.node();
        self.ui()
            .with_document(|doc| doc.attribute(node, "class").map(str::to_string))
    }

    fn set_style(&self, css: &str) {
        let node = self.node();
        self.ui()
            .with_document_mut(|doc| doc.set_attribute(node, "style", css));
    }

    fn is_attached(&self) -> bool {
        let node = self.node();
        self.ui().with_document(|doc| doc.is_connected(node))
    }

    /// Remove from the parent, release every listener in the subtree and
    /// free its nodes. The component is destroyed; its node ids go stale.
    fn detach(&self) {
        self.ui().detach(self.node());
    }

    fn outer_html(&self) -> String {
        let node = self.node();
        self.ui().with_document(|doc| doc.outer_html(node))
    }
}

impl Component for ComponentBase {
    fn base(&self) -> &ComponentBase {
        self
    }
}

// ===== CALLBACKS =====

/// How a control reacts to its event: a closure that receives the component
/// and the event, or the name of a callback registered on the [`Ui`].
pub enum Callback<C> {
    Bound(Rc<dyn Fn(&C, &Event)>),
    Named(String),
}

impl<C> Clone for Callback<C> {
    fn clone(&self) -> Self {
        match self {
            Callback::Bound(f) => Callback::Bound(f.clone()),
            Callback::Named(name) => Callback::Named(name.clone()),
        }
    }
}

impl<C> Callback<C> {
    pub fn bound(f: impl Fn(&C, &Event) + 'static) -> Self {
        Callback::Bound(Rc::new(f))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Callback::Named(name.into())
    }
}

/// Wire `callback` to `kind` events on `target`, one of the component's
/// nodes. Closures capture a clone of the component, kept alive by the
/// registry until the node is detached.
pub(crate) fn bind_callback<C>(component: &C, target: NodeId, kind: EventKind, callback: Callback<C>)
where
    C: Component + Clone + 'static,
{
    match callback {
        Callback::Bound(f) => {
            let me = component.clone();
            let handler: Handler = Rc::new(move |event: &Event| f(&me, event));
            component.ui().bind(component.id(), target, kind, handler);
        }
        Callback::Named(name) => {
            component.ui().with_document_mut(|doc| {
                doc.set_attribute(target, kind.callback_attribute(), &name)
            });
        }
    }
}

// ===== FRAGMENT HELPERS =====

pub(crate) fn create_with_class(doc: &mut Document, tag: &str, class: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.set_class(node, class);
    node
}

pub(crate) fn append_text(doc: &mut Document, parent: NodeId, text: &str) {
    let text = doc.create_text(text);
    doc.append_child(parent, text);
}

pub(crate) fn append_form_label(doc: &mut Document, parent: NodeId, for_id: &str, caption: &str) {
    let label = create_with_class(doc, "label", classes::FORM_LABEL);
    doc.set_attribute(label, "for", for_id);
    append_text(doc, label, caption);
    doc.append_child(parent, label);
}

/// Move parsed markdown into `parent`, top-level node by node.
pub(crate) fn append_markdown(ui: &Ui, parent: NodeId, text: &str) {
    let markup = ui.markdown(text);
    ui.with_document_mut(|doc| {
        for child in doc.parse_fragment(&markup) {
            doc.append_child(parent, child);
        }
    });
}

/// Pair values with labels positionally. Missing labels default to the
/// values; a length mismatch is flagged and truncates to the shorter list.
pub(crate) fn pair_options(
    ui: &Ui,
    owner: &ComponentId,
    values: &[String],
    labels: &[String],
) -> Vec<(String, String)> {
    if labels.is_empty() {
        return values.iter().map(|v| (v.clone(), v.clone())).collect();
    }
    if labels.len() != values.len() {
        ui.warn(Diagnostic::LabelMismatch {
            component: owner.clone(),
            values: values.len(),
            labels: labels.len(),
        });
    }
    values
        .iter()
        .zip(labels)
        .map(|(value, label)| (value.clone(), label.clone()))
        .collect()
}

pub(crate) fn stringify<I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    items.into_iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_sets_id_attribute() {
        let ui = Ui::new();
        let base = ComponentBase::new(&ui, "div");
        assert_eq!(base.outer_html(), format!("<div id=\"{}\"></div>", base.id()));
    }

    #[test]
    fn set_class_overwrites() {
        let ui = Ui::new();
        let base = ComponentBase::new(&ui, "div");
        base.set_class("a b");
        base.set_class("c");
        assert_eq!(base.class_name().as_deref(), Some("c"));
    }

    #[test]
    fn add_to_missing_id_is_lookup_failure() {
        let ui = Ui::new();
        let base = ComponentBase::new(&ui, "div");
        let err = base.add_to_id("nowhere").unwrap_err();
        assert!(matches!(err, UiError::ElementNotFound(id) if id == "nowhere"));
        assert!(!base.is_attached());
    }

    #[test]
    fn pairing_defaults_labels_to_values() {
        let ui = Ui::new();
        let owner = ComponentId::fixed("dash-9");
        let pairs = pair_options(&ui, &owner, &stringify([1, 2, 3]), &[]);
        assert_eq!(
            pairs,
            vec![
                ("1".to_string(), "1".to_string()),
                ("2".to_string(), "2".to_string()),
                ("3".to_string(), "3".to_string()),
            ]
        );
        assert!(ui.diagnostics().is_empty());
    }

    #[test]
    fn pairing_truncates_and_warns_on_mismatch() {
        let ui = Ui::new();
        let owner = ComponentId::fixed("dash-9");
        let pairs = pair_options(&ui, &owner, &stringify(["a", "b", "c"]), &stringify(["A"]));
        assert_eq!(pairs, vec![("a".to_string(), "A".to_string())]);
        assert_eq!(
            ui.diagnostics(),
            vec![Diagnostic::LabelMismatch {
                component: owner,
                values: 3,
                labels: 1,
            }]
        );
    }
}
