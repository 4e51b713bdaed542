// Browser Mirror
// Replays Document changes into the page through web-sys

use super::{Document, DomObserver, NodeId, NodeKind};
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const INDEX_KEY: &str = "__dashuiIndex";
const GENERATION_KEY: &str = "__dashuiGeneration";

/// Keeps browser nodes in step with a [`Document`].
///
/// Browser nodes are created on demand: a node gets its mirror when it is
/// appended under an already mirrored parent, and from then on every change
/// to it is applied to the mirror as well. Each mirror carries its
/// [`NodeId`], which [`BrowserMirror::node_id`] reads back from an event
/// target.
pub struct BrowserMirror {
    document: web_sys::Document,
    mirrors: HashMap<NodeId, web_sys::Node>,
}

impl BrowserMirror {
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            mirrors: HashMap::new(),
        }
    }

    /// Map the body of `doc` onto `body` and mirror its current children.
    pub fn adopt_body(&mut self, doc: &Document, body: web_sys::Node) -> Result<(), JsValue> {
        tag_node(&body, doc.body())?;
        self.mirrors.insert(doc.body(), body.clone());
        for child in doc.children(doc.body()) {
            let mirror = self.build(doc, *child)?;
            body.append_child(&mirror)?;
        }
        log::debug!("mirrored {} node(s) into the page", self.mirrors.len());
        Ok(())
    }

    /// The [`NodeId`] a mirrored browser node stands for.
    pub fn node_id(node: &web_sys::Node) -> Option<NodeId> {
        let index = js_sys::Reflect::get(node, &INDEX_KEY.into()).ok()?.as_f64()?;
        let generation = js_sys::Reflect::get(node, &GENERATION_KEY.into())
            .ok()?
            .as_f64()?;
        Some(NodeId::from_parts(index as usize, generation as u32))
    }

    pub fn mirror(&self, node: NodeId) -> Option<&web_sys::Node> {
        self.mirrors.get(&node)
    }

    fn build(&mut self, doc: &Document, node: NodeId) -> Result<web_sys::Node, JsValue> {
        if let Some(existing) = self.mirrors.get(&node) {
            return Ok(existing.clone());
        }
        let mirror: web_sys::Node = match doc.kind(node) {
            Some(NodeKind::Text(text)) => self.document.create_text_node(text).into(),
            Some(NodeKind::Element(element)) => {
                let created = if in_svg(doc, node) {
                    self.document
                        .create_element_ns(Some(SVG_NAMESPACE), element.tag())?
                } else {
                    self.document.create_element(element.tag())?
                };
                for (name, value) in element.attributes() {
                    created.set_attribute(name, value)?;
                }
                let created: web_sys::Node = created.into();
                for child in doc.children(node) {
                    let child = self.build(doc, *child)?;
                    created.append_child(&child)?;
                }
                created
            }
            None => return Err(JsValue::from_str("node was freed")),
        };
        tag_node(&mirror, node)?;
        sync_properties(doc, node, &mirror);
        self.mirrors.insert(node, mirror.clone());
        Ok(mirror)
    }
}

impl DomObserver for BrowserMirror {
    fn appended(&mut self, doc: &Document, parent: NodeId, child: NodeId) {
        let Some(parent) = self.mirrors.get(&parent).cloned() else {
            return;
        };
        let result = self
            .build(doc, child)
            .and_then(|child| parent.append_child(&child).map(drop));
        report("append", result);
    }

    fn detached(&mut self, _doc: &Document, node: NodeId) {
        let Some(mirror) = self.mirrors.get(&node) else {
            return;
        };
        if let Some(parent) = mirror.parent_node() {
            report("detach", parent.remove_child(mirror).map(drop));
        }
    }

    fn attribute_changed(&mut self, doc: &Document, node: NodeId, name: &str) {
        let Some(element) = self
            .mirrors
            .get(&node)
            .and_then(|mirror| mirror.dyn_ref::<web_sys::Element>())
        else {
            return;
        };
        let result = match doc.attribute(node, name) {
            Some(value) => element.set_attribute(name, value),
            None => element.remove_attribute(name),
        };
        report("attribute", result);
    }

    fn text_changed(&mut self, doc: &Document, node: NodeId) {
        if let (Some(mirror), Some(NodeKind::Text(text))) = (self.mirrors.get(&node), doc.kind(node))
        {
            mirror.set_node_value(Some(text.as_str()));
        }
    }

    fn property_changed(&mut self, doc: &Document, node: NodeId) {
        if let Some(mirror) = self.mirrors.get(&node) {
            sync_properties(doc, node, mirror);
        }
    }

    fn released(&mut self, node: NodeId) {
        self.mirrors.remove(&node);
    }

    fn title_changed(&mut self, title: &str) {
        self.document.set_title(title);
    }
}

fn tag_node(mirror: &web_sys::Node, node: NodeId) -> Result<(), JsValue> {
    js_sys::Reflect::set(mirror, &INDEX_KEY.into(), &(node.index() as f64).into())?;
    js_sys::Reflect::set(
        mirror,
        &GENERATION_KEY.into(),
        &f64::from(node.generation()).into(),
    )?;
    Ok(())
}

fn in_svg(doc: &Document, node: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(id) = current {
        if doc.tag(id) == Some("svg") {
            return true;
        }
        current = doc.parent(id);
    }
    false
}

/// Push live `value`/`checked` onto the browser control.
fn sync_properties(doc: &Document, node: NodeId, mirror: &web_sys::Node) {
    if let Some(input) = mirror.dyn_ref::<web_sys::HtmlInputElement>() {
        if let Some(value) = doc.value(node) {
            input.set_value(&value);
        }
        input.set_checked(doc.checked(node));
    } else if let Some(select) = mirror.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(&doc.value(node).unwrap_or_default());
    } else if let Some(area) = mirror.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(&doc.value(node).unwrap_or_default());
    }
}

fn report(operation: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("browser {operation} failed: {err:?}");
    }
}
