//! Owned element tree.
//!
//! [`Document`] models the part of the browser DOM the components touch:
//! elements with ordered attributes, text nodes, parent/child links that
//! enforce a single parent per node, `innerHTML` in both directions, an
//! `id` index for `getElementById`, the document title and the live
//! `value`/`checked` properties of form controls.
//!
//! A detached node stays valid and can be attached again, the same way a
//! script can keep a reference to a removed element. [`Document::free_subtree`]
//! reclaims nodes for good: their slots are reused and every [`NodeId`]
//! still pointing at them goes stale. Operations on a stale id do nothing
//! and lookups through it come back empty. A [`NodeId`] is only meaningful
//! for the document that created it.
//!
//! With the `web` feature, a [`DomObserver`] installed through
//! [`Document::set_observer`] replays every change into the browser page,
//! see the `web` module.

pub mod html;
#[cfg(feature = "web")]
pub mod web;

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }

    #[cfg(feature = "web")]
    pub(crate) fn from_parts(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    // Live properties; `None` falls back to the attribute.
    // On an <option>, `checked` is its selectedness.
    value: Option<String>,
    checked: Option<bool>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: IndexMap::new(),
            value: None,
            checked: None,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(&class)
    }
}

/// Follows the changes of a [`Document`] so another tree can be kept in
/// step with it. Called after the document has applied the change.
pub trait DomObserver {
    fn appended(&mut self, _doc: &Document, _parent: NodeId, _child: NodeId) {}

    fn detached(&mut self, _doc: &Document, _node: NodeId) {}

    /// `name` was set or removed on `node`.
    fn attribute_changed(&mut self, _doc: &Document, _node: NodeId, _name: &str) {}

    fn text_changed(&mut self, _doc: &Document, _node: NodeId) {}

    /// Live `value`/`checked` of a form control changed.
    fn property_changed(&mut self, _doc: &Document, _node: NodeId) {}

    /// `node` was freed; its id is stale from now on.
    fn released(&mut self, _node: NodeId) {}

    fn title_changed(&mut self, _title: &str) {}
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    // id attribute -> elements carrying it, oldest first
    ids: HashMap<String, Vec<NodeId>>,
    observer: Option<Box<dyn DomObserver>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("live_nodes", &self.live_nodes())
            .field("slots", &self.slots.len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl Document {
    /// An empty `<html><head></head><body></body></html>` document.
    pub fn new() -> Self {
        let placeholder = NodeId {
            index: 0,
            generation: 0,
        };
        let mut document = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: placeholder,
            head: placeholder,
            body: placeholder,
            ids: HashMap::new(),
            observer: None,
        };
        document.root = document.create_element("html");
        document.head = document.create_element("head");
        document.body = document.create_element("body");
        document.append_child(document.root, document.head);
        document.append_child(document.root, document.body);
        document
    }

    pub fn document_element(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Install the observer that follows every later change, replacing the
    /// previous one.
    pub fn set_observer(&mut self, observer: Box<dyn DomObserver>) {
        self.observer = Some(observer);
    }

    pub fn take_observer(&mut self) -> Option<Box<dyn DomObserver>> {
        self.observer.take()
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn DomObserver, &Document)) {
        if let Some(mut observer) = self.observer.take() {
            f(observer.as_mut(), self);
            self.observer = Some(observer);
        }
    }

    // ===== NODE STORAGE =====

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(tag)))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let node = Node {
            kind,
            parent: None,
            children: Vec::new(),
        };
        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.node = Some(node);
                return NodeId {
                    index,
                    generation: slot.generation,
                };
            }
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    /// Whether `node` still refers to a live node of this document.
    pub fn exists(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    pub fn live_nodes(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Slots ever allocated, live or waiting for reuse.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Detach `root` and free it with everything below it. Their ids leave
    /// the id index and their slots are reused by later nodes. The document
    /// element, head and body are never freed. Returns how many nodes were
    /// freed.
    pub fn free_subtree(&mut self, root: NodeId) -> usize {
        if [self.root, self.head, self.body].contains(&root) {
            log::warn!("refusing to free document node {root:?}");
            return 0;
        }
        self.detach(root);
        let nodes = self.descendants(root);
        for node in &nodes {
            self.unindex_id(*node);
            if let Some(slot) = self.slots.get_mut(node.index)
                && slot.generation == node.generation
                && slot.node.take().is_some()
            {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(node.index);
            }
            let node = *node;
            self.notify(|observer, _| observer.released(node));
        }
        nodes.len()
    }

    /// Deep copy of `node` from `source`, detached. `None` when `node` is
    /// stale in `source`.
    pub fn import_node(&mut self, source: &Document, node: NodeId) -> Option<NodeId> {
        let copy = match source.kind(node)? {
            NodeKind::Text(text) => self.create_text(text.clone()),
            NodeKind::Element(element) => {
                let copy = self.create_element(element.tag());
                for (name, value) in element.attributes() {
                    self.set_attribute(copy, name, value);
                }
                if let Some(target) = self.element_mut(copy) {
                    target.value = element.value.clone();
                    target.checked = element.checked;
                }
                for child in source.children(node) {
                    if let Some(child) = self.import_node(source, *child) {
                        self.append_child(copy, child);
                    }
                }
                copy
            }
        };
        Some(copy)
    }

    // ===== INSPECTION =====

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.node(node).map(|node| &node.kind)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match self.kind(node)? {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.node_mut(node)?.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::tag)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map_or(&[], |node| node.children.as_slice())
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Attached to the document tree, directly or through its ancestors.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// Topmost ancestor; the node itself when it has no parent.
    pub fn tree_root(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// `node` and everything below it, in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if !self.exists(id) {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.tag(*id) == Some(tag))
            .collect()
    }

    pub fn elements_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(|el| el.has_class(class)))
            .collect()
    }

    /// First attached element carrying `id`, like `document.getElementById`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids
            .get(id)?
            .iter()
            .copied()
            .find(|node| self.is_connected(*node))
    }

    // ===== ATTRIBUTES =====

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attribute(name)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if !self.is_element(node) {
            log::warn!("set_attribute({name}) on text node {node:?} ignored");
            return;
        }
        if name == "id" {
            self.unindex_id(node);
            self.ids.entry(value.to_string()).or_default().push(node);
        }
        if let Some(element) = self.element_mut(node) {
            element.attributes.insert(name.clone(), value.to_string());
        }
        self.notify(|observer, doc| observer.attribute_changed(doc, node, &name));
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let name = name.to_ascii_lowercase();
        if name == "id" {
            self.unindex_id(node);
        }
        let removed = self
            .element_mut(node)
            .is_some_and(|element| element.attributes.shift_remove(&name).is_some());
        if removed {
            self.notify(|observer, doc| observer.attribute_changed(doc, node, &name));
        }
    }

    fn unindex_id(&mut self, node: NodeId) {
        let Some(old) = self.attribute(node, "id").map(str::to_string) else {
            return;
        };
        if let Some(nodes) = self.ids.get_mut(&old) {
            nodes.retain(|id| *id != node);
            if nodes.is_empty() {
                self.ids.remove(&old);
            }
        }
    }

    /// Overwrites the whole class attribute.
    pub fn set_class(&mut self, node: NodeId, class: &str) {
        self.set_attribute(node, "class", class);
    }

    // ===== TREE MUTATION =====

    /// Append `child` as the last child of `parent`, moving it out of its
    /// current parent first. Appending a node into its own subtree, or into a
    /// text node, is refused.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_element(parent) {
            log::warn!("cannot append {child:?} to text node {parent:?}");
            return;
        }
        if !self.exists(child) {
            log::warn!("cannot append freed node {child:?}");
            return;
        }
        if self.contains(child, parent) {
            log::warn!("cannot append {child:?} inside its own subtree");
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        self.notify(|observer, doc| observer.appended(doc, parent, child));
    }

    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.node_mut(node).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|id| *id != node);
        }
        self.notify(|observer, doc| observer.detached(doc, node));
    }

    /// Detach every child of `node` and return them in their former order.
    pub fn remove_children(&mut self, node: NodeId) -> Vec<NodeId> {
        let children = self
            .node_mut(node)
            .map(|node| std::mem::take(&mut node.children))
            .unwrap_or_default();
        for child in &children {
            if let Some(node) = self.node_mut(*child) {
                node.parent = None;
            }
            let child = *child;
            self.notify(|observer, doc| observer.detached(doc, child));
        }
        children
    }

    // ===== TEXT AND MARKUP =====

    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in self.descendants(node) {
            if let Some(NodeKind::Text(text)) = self.kind(id) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace all children with a single text node. Returns the removed
    /// children.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> Vec<NodeId> {
        if let Some(NodeKind::Text(existing)) = self.node_mut(node).map(|node| &mut node.kind) {
            *existing = text.to_string();
            self.notify(|observer, doc| observer.text_changed(doc, node));
            return Vec::new();
        }
        let removed = self.remove_children(node);
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(node, text_node);
        }
        removed
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            html::serialize(self, *child, &mut out);
        }
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        html::serialize(self, node, &mut out);
        out
    }

    /// Parse `markup` into detached nodes, the way a scratch element's
    /// `innerHTML` would, and return the top-level nodes.
    pub fn parse_fragment(&mut self, markup: &str) -> Vec<NodeId> {
        let scratch = self.create_element("div");
        html::parse_into(self, scratch, markup);
        let nodes = self.remove_children(scratch);
        self.free_subtree(scratch);
        nodes
    }

    /// Destructive `innerHTML` assignment. Returns the removed children.
    pub fn set_inner_html(&mut self, node: NodeId, markup: &str) -> Vec<NodeId> {
        let removed = self.remove_children(node);
        for child in self.parse_fragment(markup) {
            self.append_child(node, child);
        }
        removed
    }

    // ===== FORM PROPERTIES =====

    /// Current value of a form control: the live property when it was set,
    /// otherwise what the markup says.
    pub fn value(&self, node: NodeId) -> Option<String> {
        let element = self.element(node)?;
        if let Some(value) = &element.value {
            return Some(value.clone());
        }
        match element.tag() {
            "textarea" => Some(self.text_content(node)),
            "select" => {
                let options = self.elements_by_tag(node, "option");
                let picked = |option: &NodeId| self.element(*option).and_then(|el| el.checked);
                if options.iter().any(|option| picked(option).is_some()) {
                    // A pick that matched no option leaves nothing selected
                    return options
                        .iter()
                        .find(|option| picked(*option) == Some(true))
                        .map(|option| self.option_value(*option));
                }
                let chosen = options
                    .iter()
                    .copied()
                    .find(|option| self.attribute(*option, "selected").is_some())
                    .or_else(|| options.first().copied())?;
                Some(self.option_value(chosen))
            }
            _ => element.attribute("value").map(str::to_string),
        }
    }

    fn option_value(&self, option: NodeId) -> String {
        self.attribute(option, "value")
            .map(str::to_string)
            .unwrap_or_else(|| self.text_content(option))
    }

    /// Set the live value. On a `<select>` this picks the first option
    /// carrying `value`; with no such option nothing stays selected.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if self.tag(node) == Some("select") {
            let mut matched = false;
            for option in self.elements_by_tag(node, "option") {
                let selected = !matched && self.option_value(option) == value;
                matched |= selected;
                if let Some(element) = self.element_mut(option) {
                    element.checked = Some(selected);
                }
            }
            if !matched {
                log::debug!("no option `{value}` in select {node:?}, selection cleared");
            }
        } else if let Some(element) = self.element_mut(node) {
            element.value = Some(value.to_string());
        } else {
            return;
        }
        self.notify(|observer, doc| observer.property_changed(doc, node));
    }

    pub fn checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|element| {
            element
                .checked
                .unwrap_or_else(|| element.attribute("checked").is_some())
        })
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(element) = self.element_mut(node) {
            element.checked = Some(checked);
            self.notify(|observer, doc| observer.property_changed(doc, node));
        }
    }

    // ===== DOCUMENT =====

    pub fn title(&self) -> String {
        self.children(self.head)
            .iter()
            .copied()
            .find(|id| self.tag(*id) == Some("title"))
            .map(|id| self.text_content(id))
            .unwrap_or_default()
    }

    pub fn set_title(&mut self, title: &str) {
        let existing = self
            .children(self.head)
            .iter()
            .copied()
            .find(|id| self.tag(*id) == Some("title"));
        let title_node = match existing {
            Some(node) => node,
            None => {
                let node = self.create_element("title");
                self.append_child(self.head, node);
                node
            }
        };
        self.set_text_content(title_node, title);
        self.notify(|observer, _| observer.title_changed(title));
    }

    /// Serialize the whole document, doctype included.
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.outer_html(self.root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_head_and_body() {
        let doc = Document::new();
        assert_eq!(
            doc.outer_html(doc.document_element()),
            "<html><head></head><body></body></html>"
        );
    }

    #[test]
    fn append_child_moves_node_between_parents() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("span");

        doc.append_child(a, child);
        doc.append_child(b, child);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn append_child_refuses_cycles() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner);

        doc.append_child(inner, outer);

        assert_eq!(doc.parent(outer), None);
        assert!(doc.children(inner).is_empty());
    }

    #[test]
    fn get_element_by_id_only_sees_attached_elements() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "id", "box");
        assert_eq!(doc.get_element_by_id("box"), None);

        doc.append_child(doc.body(), div);
        assert_eq!(doc.get_element_by_id("box"), Some(div));

        doc.set_attribute(div, "id", "renamed");
        assert_eq!(doc.get_element_by_id("box"), None);
        assert_eq!(doc.get_element_by_id("renamed"), Some(div));
    }

    #[test]
    fn set_inner_html_replaces_children() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let old = doc.create_text("old");
        doc.append_child(div, old);

        let removed = doc.set_inner_html(div, "<p>new <em>text</em></p>");

        assert_eq!(removed, vec![old]);
        assert_eq!(doc.inner_html(div), "<p>new <em>text</em></p>");
    }

    #[test]
    fn value_falls_back_to_markup() {
        let mut doc = Document::new();
        let select = doc.create_element("select");
        doc.set_inner_html(
            select,
            r#"<option value="a">A</option><option value="b" selected>B</option>"#,
        );
        assert_eq!(doc.value(select).as_deref(), Some("b"));

        doc.set_value(select, "a");
        assert_eq!(doc.value(select).as_deref(), Some("a"));

        let area = doc.create_element("textarea");
        doc.set_text_content(area, "draft");
        assert_eq!(doc.value(area).as_deref(), Some("draft"));
    }

    #[test]
    fn select_value_must_match_an_option() {
        let mut doc = Document::new();
        let select = doc.create_element("select");
        doc.set_inner_html(
            select,
            r#"<option value="a">A</option><option value="b">B</option>"#,
        );

        doc.set_value(select, "zzz");
        assert_eq!(doc.value(select), None);

        doc.set_value(select, "b");
        assert_eq!(doc.value(select).as_deref(), Some("b"));
    }

    #[test]
    fn freed_slots_are_reused_and_old_ids_go_stale() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "id", "gone");
        let text = doc.create_text("inside");
        doc.append_child(div, text);
        doc.append_child(doc.body(), div);
        let live = doc.live_nodes();

        assert_eq!(doc.free_subtree(div), 2);
        assert_eq!(doc.live_nodes(), live - 2);
        assert!(!doc.exists(div));
        assert_eq!(doc.get_element_by_id("gone"), None);
        assert!(doc.children(doc.body()).is_empty());

        let allocated = doc.allocated();
        let fresh = doc.create_element("span");
        assert_eq!(doc.allocated(), allocated);
        assert!(fresh.index() == div.index() || fresh.index() == text.index());
        assert_ne!(fresh, div);
        assert_eq!(doc.tag(div), None);
        assert_eq!(doc.parent(text), None);
        assert_eq!(doc.outer_html(div), "");

        // Stale ids are inert
        doc.set_attribute(div, "class", "x");
        doc.append_child(doc.body(), div);
        assert!(doc.children(doc.body()).is_empty());
        assert_eq!(doc.free_subtree(div), 0);
    }

    #[test]
    fn parsing_fragments_leaves_no_scratch_nodes() {
        let mut doc = Document::new();
        let host = doc.create_element("div");
        let live = doc.live_nodes();
        for _ in 0..100 {
            let removed = doc.set_inner_html(host, "<p>one <b>two</b></p>");
            for node in removed {
                doc.free_subtree(node);
            }
        }
        assert_eq!(doc.live_nodes(), live + 4);
        assert!(doc.allocated() < live + 16);
    }

    #[test]
    fn import_node_copies_a_subtree() {
        let mut source = Document::new();
        let nodes = source.parse_fragment(r#"<ul id="list"><li class="a">one</li></ul>"#);
        let input = source.create_element("input");
        source.set_value(input, "typed");

        let mut doc = Document::new();
        let list = doc.import_node(&source, nodes[0]).unwrap();
        let copied_input = doc.import_node(&source, input).unwrap();
        doc.append_child(doc.body(), list);

        assert_eq!(doc.outer_html(list), r#"<ul id="list"><li class="a">one</li></ul>"#);
        assert_eq!(doc.get_element_by_id("list"), Some(list));
        assert_eq!(doc.value(copied_input).as_deref(), Some("typed"));
    }

    #[derive(Default)]
    struct Recorder(std::rc::Rc<std::cell::RefCell<Vec<String>>>);

    impl DomObserver for Recorder {
        fn appended(&mut self, doc: &Document, parent: NodeId, child: NodeId) {
            let parent = doc.tag(parent).unwrap_or("#text").to_string();
            let child = doc.tag(child).unwrap_or("#text").to_string();
            self.0.borrow_mut().push(format!("append {child} to {parent}"));
        }

        fn detached(&mut self, doc: &Document, node: NodeId) {
            let tag = doc.tag(node).unwrap_or("#text").to_string();
            self.0.borrow_mut().push(format!("detach {tag}"));
        }

        fn attribute_changed(&mut self, doc: &Document, node: NodeId, name: &str) {
            let value = doc.attribute(node, name).unwrap_or("<removed>").to_string();
            self.0.borrow_mut().push(format!("{name}={value}"));
        }

        fn property_changed(&mut self, doc: &Document, node: NodeId) {
            let value = doc.value(node).unwrap_or_default();
            self.0.borrow_mut().push(format!("value {value}"));
        }

        fn released(&mut self, _node: NodeId) {
            self.0.borrow_mut().push("released".to_string());
        }

        fn title_changed(&mut self, title: &str) {
            self.0.borrow_mut().push(format!("title {title}"));
        }
    }

    #[test]
    fn observer_sees_every_change() {
        let mut doc = Document::new();
        let recorder = Recorder::default();
        let log = recorder.0.clone();
        doc.set_observer(Box::new(recorder));

        let input = doc.create_element("input");
        doc.set_attribute(input, "id", "field");
        doc.append_child(doc.body(), input);
        doc.set_value(input, "typed");
        doc.remove_attribute(input, "id");
        doc.set_title("Hi");
        doc.free_subtree(input);

        let log = log.borrow();
        assert_eq!(log[0], "id=field");
        assert_eq!(log[1], "append input to body");
        assert_eq!(log[2], "value typed");
        assert_eq!(log[3], "id=<removed>");
        assert!(log.contains(&"title Hi".to_string()));
        assert_eq!(log[log.len() - 2..], ["detach input", "released"]);
    }

    #[test]
    fn checked_property_overrides_attribute() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "checked", "");
        assert!(doc.checked(input));

        doc.set_checked(input, false);
        assert!(!doc.checked(input));
        assert_eq!(doc.attribute(input, "checked"), Some(""));
    }

    #[test]
    fn title_is_created_once_and_updated() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), "");
        doc.set_title("First");
        doc.set_title("Second");
        assert_eq!(doc.title(), "Second");
        assert_eq!(doc.elements_by_tag(doc.head(), "title").len(), 1);
    }
}
