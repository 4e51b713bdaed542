// Modal Component
// Dialog with a title bar, markdown body and optional markdown footer.
// Hidden until shown; the close button hides it again.

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::EventKind;
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Modal {
    base: ComponentBase,
    close_button: NodeId,
    body: NodeId,
}

pub struct ModalBuilder {
    title: String,
    body: String,
    footer: Option<String>,
}

impl ModalBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            footer: None,
        }
    }

    pub fn body(mut self, markdown: impl Into<String>) -> Self {
        self.body = markdown.into();
        self
    }

    pub fn footer(mut self, markdown: impl Into<String>) -> Self {
        self.footer = Some(markdown.into());
        self
    }

    pub fn build(self, ui: &Ui) -> Modal {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::MODAL);
        let node = base.node();

        let (content, close_button, body) = ui.with_document_mut(|doc| {
            doc.set_attribute(node, "tabindex", "-1");
            doc.set_attribute(node, "aria-hidden", "true");
            let dialog = create_with_class(doc, "div", classes::MODAL_DIALOG);
            let content = create_with_class(doc, "div", classes::MODAL_CONTENT);

            let header = create_with_class(doc, "div", classes::MODAL_HEADER);
            let title = create_with_class(doc, "h5", classes::MODAL_TITLE);
            append_text(doc, title, &self.title);
            let close = create_with_class(doc, "button", classes::BUTTON_CLOSE);
            doc.set_attribute(close, "type", "button");
            doc.set_attribute(close, "aria-label", "Close");
            doc.append_child(header, title);
            doc.append_child(header, close);

            let body = create_with_class(doc, "div", classes::MODAL_BODY);
            doc.append_child(content, header);
            doc.append_child(content, body);
            doc.append_child(dialog, content);
            doc.append_child(node, dialog);
            (content, close, body)
        });

        append_markdown(ui, body, &self.body);
        if let Some(footer_text) = &self.footer {
            let footer = ui.with_document_mut(|doc| {
                let footer = create_with_class(doc, "div", classes::MODAL_FOOTER);
                doc.append_child(content, footer);
                footer
            });
            append_markdown(ui, footer, footer_text);
        }

        let modal = Modal {
            base,
            close_button,
            body,
        };
        bind_callback(&modal, close_button, EventKind::Click, Callback::bound(|modal: &Modal, _| modal.hide()));
        modal
    }
}

pub fn modal(title: impl Into<String>) -> ModalBuilder {
    ModalBuilder::new(title)
}

impl Modal {
    pub fn show(&self) {
        let node = self.node();
        self.ui().with_document_mut(|doc| {
            doc.set_class(node, classes::MODAL_SHOWN);
            doc.set_attribute(node, "style", "display: block");
            doc.set_attribute(node, "aria-modal", "true");
            doc.remove_attribute(node, "aria-hidden");
        });
        log::debug!("modal {} shown", self.id());
    }

    pub fn hide(&self) {
        let node = self.node();
        self.ui().with_document_mut(|doc| {
            doc.set_class(node, classes::MODAL);
            doc.remove_attribute(node, "style");
            doc.remove_attribute(node, "aria-modal");
            doc.set_attribute(node, "aria-hidden", "true");
        });
    }

    pub fn is_shown(&self) -> bool {
        let node = self.node();
        self.ui()
            .with_document(|doc| doc.element(node).is_some_and(|el| el.has_class("show")))
    }

    pub fn close_button(&self) -> NodeId {
        self.close_button
    }

    /// The `.modal-body` element.
    pub fn body_node(&self) -> NodeId {
        self.body
    }
}

impl Component for Modal {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_shown() {
        let ui = Ui::new();
        let modal = modal("Example").body("Hello **there**").build(&ui);
        assert!(!modal.is_shown());
        let html = modal.outer_html();
        assert!(html.contains(r#"tabindex="-1" aria-hidden="true""#));
        assert!(html.contains(r#"<h5 class="modal-title">Example</h5>"#));
        assert!(html.contains("<p>Hello <strong>there</strong></p>"));
        assert!(!html.contains("modal-footer"));
    }

    #[test]
    fn show_and_hide_toggle_state() {
        let ui = Ui::new();
        let modal = modal("Example").footer("*footer*").build(&ui);
        assert!(modal.outer_html().contains(r#"<div class="modal-footer"><p><em>footer</em></p></div>"#));

        modal.show();
        assert!(modal.is_shown());
        let html = modal.outer_html();
        assert!(html.contains(r#"style="display: block""#));
        assert!(html.contains(r#"aria-modal="true""#));
        assert!(!html.contains("aria-hidden"));

        ui.click(modal.close_button()).unwrap();
        assert!(!modal.is_shown());
        assert!(modal.outer_html().contains(r#"aria-hidden="true""#));
    }
}
