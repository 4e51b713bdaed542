//! The host runtime.
//!
//! A [`Ui`] owns everything a browser page would: the document, the id
//! allocator, the listener registry, the named callback namespace and the
//! page slot. It is a cheap handle (`Rc<RefCell<…>>`) shared by every
//! component built from it, single-threaded like the browser UI thread.
//!
//! Event dispatch clones the handler out of the registry and releases all
//! borrows before calling it, so callbacks are free to rebuild the page.
//!
//! With the `web` feature, [`Ui::mount`] puts the document on the page the
//! program runs in and feeds browser events into [`Ui::dispatch`].

mod bindings;
mod diagnostics;
mod ids;
#[cfg(feature = "web")]
mod mount;

pub use diagnostics::Diagnostic;
pub use ids::ComponentId;
#[cfg(feature = "web")]
pub use mount::WebMount;

pub(crate) use bindings::Handler;

use crate::config::UiConfig;
use crate::dom::{Document, NodeId};
use crate::error::{Result, UiError};
use crate::event::{Event, EventKind};
use crate::layout::Container;
use crate::markdown;
use bindings::BindingRegistry;
use ids::IdAllocator;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Oldest diagnostics are dropped past this many.
pub const MAX_DIAGNOSTICS: usize = 256;

pub(crate) struct UiState {
    pub(crate) config: UiConfig,
    pub(crate) document: Document,
    ids: IdAllocator,
    bindings: BindingRegistry,
    callbacks: IndexMap<String, Handler>,
    page: Option<(ComponentId, NodeId)>,
    diagnostics: Vec<Diagnostic>,
}

impl UiState {
    /// Destroy the given subtrees: release the listeners of every node in
    /// them, then free the nodes.
    pub(crate) fn release_subtrees(&mut self, roots: &[NodeId]) {
        if roots.is_empty() {
            return;
        }
        let nodes: Vec<NodeId> = roots
            .iter()
            .flat_map(|root| self.document.descendants(*root))
            .collect();
        let released = self.bindings.release(&nodes);
        if released > 0 {
            log::debug!("released {released} listener(s)");
        }
        let freed: usize = roots
            .iter()
            .map(|root| self.document.free_subtree(*root))
            .sum();
        log::trace!("freed {freed} node(s)");
    }
}

#[derive(Clone)]
pub struct Ui {
    inner: Rc<RefCell<UiState>>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Ui")
            .field("title", &state.document.title())
            .field("page", &state.page)
            .field("bindings", &state.bindings.len())
            .field("callbacks", &state.callbacks.len())
            .finish()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        let mut document = Document::new();
        let root = document.document_element();
        document.set_attribute(root, "lang", &config.language);

        let head = document.head();
        let charset = document.create_element("meta");
        document.set_attribute(charset, "charset", "utf-8");
        document.append_child(head, charset);
        let viewport = document.create_element("meta");
        document.set_attribute(viewport, "name", "viewport");
        document.set_attribute(viewport, "content", "width=device-width, initial-scale=1");
        document.append_child(head, viewport);
        for href in &config.stylesheets {
            let link = document.create_element("link");
            document.set_attribute(link, "rel", "stylesheet");
            document.set_attribute(link, "href", href);
            document.append_child(head, link);
        }
        for src in &config.scripts {
            let script = document.create_element("script");
            document.set_attribute(script, "src", src);
            document.set_attribute(script, "defer", "");
            document.append_child(head, script);
        }

        let state = UiState {
            ids: IdAllocator::new(config.id_prefix.clone()),
            config,
            document,
            bindings: BindingRegistry::default(),
            callbacks: IndexMap::new(),
            page: None,
            diagnostics: Vec::new(),
        };
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.inner.borrow().config.clone()
    }

    // ===== DOCUMENT ACCESS =====

    pub fn with_document<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.inner.borrow().document)
    }

    pub fn with_document_mut<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.inner.borrow_mut().document)
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub(crate) fn markdown_options(&self) -> crate::config::MarkdownOptions {
        self.inner.borrow().config.markdown
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.with_document(|doc| doc.get_element_by_id(id))
    }

    pub fn title(&self) -> String {
        self.with_document(Document::title)
    }

    pub fn set_title(&self, title: &str) {
        self.with_document_mut(|doc| doc.set_title(title));
    }

    /// Full HTML export of the current page.
    pub fn to_html(&self) -> String {
        self.with_document(Document::to_html)
    }

    pub fn markdown(&self, text: &str) -> String {
        markdown::to_html(text, self.markdown_options())
    }

    pub(crate) fn allocate_id(&self) -> ComponentId {
        self.inner.borrow_mut().ids.allocate()
    }

    // ===== PAGE SLOT =====

    /// The page, if one was constructed and not destroyed since.
    pub fn page(&self) -> Option<Container> {
        let (id, node) = self.page_slot()?;
        Some(Container::page_from_parts(self.clone(), id, node))
    }

    pub(crate) fn page_slot(&self) -> Option<(ComponentId, NodeId)> {
        let state = self.inner.borrow();
        state
            .page
            .clone()
            .filter(|(_, node)| state.document.exists(*node))
    }

    pub(crate) fn set_page_slot(&self, id: ComponentId, node: NodeId) {
        self.inner.borrow_mut().page = Some((id, node));
    }

    // ===== DIAGNOSTICS =====

    pub(crate) fn warn(&self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        let mut state = self.inner.borrow_mut();
        if state.diagnostics.len() == MAX_DIAGNOSTICS {
            state.diagnostics.remove(0);
        }
        state.diagnostics.push(diagnostic);
    }

    /// Warnings recorded so far, oldest first. Only the latest
    /// [`MAX_DIAGNOSTICS`] are kept.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.borrow().diagnostics.clone()
    }

    /// Return the recorded warnings and forget them.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.inner.borrow_mut().diagnostics)
    }

    // ===== CALLBACKS =====

    /// Register a callback that markup can refer to by name through
    /// `data-on-<event>` attributes.
    pub fn register_callback(&self, name: impl Into<String>, callback: impl Fn(&Event) + 'static) {
        let name = name.into();
        log::debug!("registered callback `{name}`");
        self.inner
            .borrow_mut()
            .callbacks
            .insert(name, Rc::new(callback));
    }

    pub fn unregister_callback(&self, name: &str) -> bool {
        self.inner
            .borrow_mut()
            .callbacks
            .shift_remove(name)
            .is_some()
    }

    pub(crate) fn bind(&self, owner: &ComponentId, node: NodeId, kind: EventKind, handler: Handler) {
        self.inner
            .borrow_mut()
            .bindings
            .bind(owner, node, kind, handler);
    }

    pub fn binding_count(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    pub fn is_bound(&self, owner: &ComponentId) -> bool {
        self.inner.borrow().bindings.is_bound(owner)
    }

    /// Drop every closure listener. Components captured by callbacks are
    /// kept alive by the registry until this or a detach releases them.
    pub fn unbind_all(&self) {
        self.inner.borrow_mut().bindings.clear();
    }

    /// Remove `node` from its parent, release the listeners in its subtree
    /// and free it. `node` and everything below it go stale.
    pub fn detach(&self, node: NodeId) {
        self.with_state_mut(|state| {
            state.document.detach(node);
            state.release_subtrees(&[node]);
        });
    }

    // ===== EVENTS =====

    /// Fire `kind` at `target`. A closure listener wins over a named
    /// callback. Returns whether a callback ran.
    pub fn dispatch(&self, kind: EventKind, target: NodeId) -> Result<bool> {
        let (event, handler) = {
            let state = self.inner.borrow();
            let doc = &state.document;
            let event = Event {
                kind,
                target,
                value: doc.value(target),
                checked: doc.checked(target),
            };
            let handler = match state.bindings.handler(target, kind) {
                Some(handler) => Some(handler),
                None => match doc.attribute(target, kind.callback_attribute()) {
                    Some(name) => match state.callbacks.get(name) {
                        Some(callback) => Some(callback.clone()),
                        None => return Err(UiError::UnknownCallback(name.to_string())),
                    },
                    None => None,
                },
            };
            (event, handler)
        };

        match handler {
            Some(handler) => {
                log::debug!("dispatching {kind} to {target:?}");
                handler(&event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn click(&self, target: NodeId) -> Result<bool> {
        self.dispatch(EventKind::Click, target)
    }

    /// Type into a text control: replace its value, then fire `input`.
    pub fn input(&self, target: NodeId, text: &str) -> Result<bool> {
        self.with_document_mut(|doc| doc.set_value(target, text));
        self.dispatch(EventKind::Input, target)
    }

    /// Pick a value on a select or range control, then fire `change`.
    pub fn change(&self, target: NodeId, value: &str) -> Result<bool> {
        self.with_document_mut(|doc| doc.set_value(target, value));
        self.dispatch(EventKind::Change, target)
    }

    /// Flip a checkbox, then fire `change`.
    pub fn toggle(&self, target: NodeId) -> Result<bool> {
        self.with_document_mut(|doc| {
            let checked = doc.checked(target);
            doc.set_checked(target, !checked);
        });
        self.dispatch(EventKind::Change, target)
    }

    /// Select a radio button, unchecking the rest of its group, then fire
    /// `change`. Choosing the already checked radio fires nothing.
    pub fn choose(&self, target: NodeId) -> Result<bool> {
        let changed = self.with_document_mut(|doc| {
            if doc.checked(target) {
                return false;
            }
            check_radio(doc, target);
            true
        });
        if !changed {
            return Ok(false);
        }
        self.dispatch(EventKind::Change, target)
    }
}

/// Check `target` and uncheck the other radios of its group.
fn check_radio(doc: &mut Document, target: NodeId) {
    if let Some(group) = doc.attribute(target, "name").map(str::to_string) {
        let root = doc.tree_root(target);
        for radio in doc.elements_by_tag(root, "input") {
            let same_group = doc.attribute(radio, "type") == Some("radio")
                && doc.attribute(radio, "name") == Some(group.as_str());
            if same_group && radio != target {
                doc.set_checked(radio, false);
            }
        }
    }
    doc.set_checked(target, true);
}
