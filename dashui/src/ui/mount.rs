// Browser Mount
// Puts a Ui on the live page and routes browser events into dispatch

use super::{Ui, check_radio};
use crate::dom::NodeId;
use crate::dom::web::BrowserMirror;
use crate::error::{Result, UiError};
use crate::event::EventKind;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

const EVENTS: [EventKind; 3] = [EventKind::Click, EventKind::Change, EventKind::Input];

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Listeners of a mounted [`Ui`]. Dropping it stops event routing; the
/// mirrored elements stay on the page.
pub struct WebMount {
    target: web_sys::EventTarget,
    listeners: Vec<(EventKind, Listener)>,
}

impl Drop for WebMount {
    fn drop(&mut self) {
        for (kind, listener) in &self.listeners {
            let _ = self
                .target
                .remove_event_listener_with_callback(kind.as_str(), listener.as_ref().unchecked_ref());
        }
    }
}

fn browser_error(err: JsValue) -> UiError {
    UiError::Browser(format!("{err:?}"))
}

impl Ui {
    /// Mirror the document body into the page this program runs in and
    /// deliver its click, change and input events to [`Ui::dispatch`].
    /// Later changes to the document show up on the page as they happen.
    pub fn mount(&self) -> Result<WebMount> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| UiError::Browser("no browser document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| UiError::Browser("document has no body".to_string()))?;

        self.with_state_mut(|state| {
            let mut mirror = BrowserMirror::new(document.clone());
            mirror
                .adopt_body(&state.document, body.clone().into())
                .map_err(browser_error)?;
            state.document.set_observer(Box::new(mirror));
            Ok::<_, UiError>(())
        })?;
        document.set_title(&self.title());

        let target: web_sys::EventTarget = body.into();
        let mut listeners = Vec::with_capacity(EVENTS.len());
        for kind in EVENTS {
            let ui = self.clone();
            let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                ui.route_browser_event(kind, &event);
            }) as Box<dyn FnMut(web_sys::Event)>);
            target
                .add_event_listener_with_callback(kind.as_str(), listener.as_ref().unchecked_ref())
                .map_err(browser_error)?;
            listeners.push((kind, listener));
        }
        log::info!("mounted into the browser page");
        Ok(WebMount { target, listeners })
    }

    /// Walk up from the event target to the first mirrored node with a
    /// callback, after copying the control state the user changed.
    fn route_browser_event(&self, kind: EventKind, event: &web_sys::Event) {
        let mut current = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        while let Some(node) = current {
            if let Some(id) = BrowserMirror::node_id(&node) {
                self.pull_properties(id, &node);
                match self.dispatch(kind, id) {
                    Ok(true) => return,
                    Ok(false) => {}
                    Err(err) => {
                        log::warn!("{kind} on {id:?}: {err}");
                        return;
                    }
                }
            }
            current = node.parent_node();
        }
    }

    fn pull_properties(&self, id: NodeId, node: &web_sys::Node) {
        self.with_document_mut(|doc| {
            if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
                match input.type_().as_str() {
                    "radio" if input.checked() => check_radio(doc, id),
                    "radio" => {}
                    "checkbox" => doc.set_checked(id, input.checked()),
                    _ => doc.set_value(id, &input.value()),
                }
            } else if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
                doc.set_value(id, &select.value());
            } else if let Some(area) = node.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                doc.set_value(id, &area.value());
            }
        });
    }
}
