// Alert Component
// Contextual message box with a markdown body, optionally dismissible

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::EventKind;
use crate::tokens::{classes, Category};
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Alert {
    base: ComponentBase,
    close_button: Option<NodeId>,
}

pub struct AlertBuilder {
    text: String,
    category: Category,
    dismissible: bool,
}

impl Default for AlertBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertBuilder {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            category: Category::Primary,
            dismissible: false,
        }
    }

    /// Markdown source of the body; inline HTML passes through.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn build(self, ui: &Ui) -> Alert {
        let base = ComponentBase::new(ui, "div");
        let node = base.node();
        let class = if self.dismissible {
            format!("{} {}", self.category.alert_class(), classes::ALERT_DISMISSIBLE)
        } else {
            self.category.alert_class()
        };
        base.set_class(&class);
        ui.with_document_mut(|doc| doc.set_attribute(node, "role", "alert"));
        append_markdown(ui, node, &self.text);

        let close_button = self.dismissible.then(|| {
            ui.with_document_mut(|doc| {
                let close = create_with_class(doc, "button", classes::BUTTON_CLOSE);
                doc.set_attribute(close, "type", "button");
                doc.set_attribute(close, "data-bs-dismiss", "alert");
                doc.set_attribute(close, "aria-label", "Close");
                doc.append_child(node, close);
                close
            })
        });

        let alert = Alert { base, close_button };
        if let Some(close) = close_button {
            bind_callback(&alert, close, EventKind::Click, Callback::bound(|alert: &Alert, _| alert.detach()));
        }
        alert
    }
}

pub fn alert(text: impl Into<String>, category: Category) -> AlertBuilder {
    AlertBuilder::new().text(text).category(category)
}

impl Alert {
    pub fn close_button(&self) -> Option<NodeId> {
        self.close_button
    }
}

impl Component for Alert {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_alert_keeps_inline_html() {
        let ui = Ui::new();
        let alert = alert("This is a <strong>danger</strong> alert!", Category::Danger).build(&ui);
        assert_eq!(alert.class_name().as_deref(), Some("alert alert-danger"));
        let html = alert.outer_html();
        assert!(html.contains("<strong>danger</strong>"));
        assert!(!html.contains("btn-close"));
        assert!(alert.close_button().is_none());
    }

    #[test]
    fn dismissible_alert_has_close_button() {
        let ui = Ui::new();
        let alert = alert("Saved", Category::Success).dismissible(true).build(&ui);
        assert_eq!(
            alert.class_name().as_deref(),
            Some("alert alert-success alert-dismissible fade show")
        );
        assert!(alert.outer_html().contains(
            r#"<button class="btn-close" type="button" data-bs-dismiss="alert" aria-label="Close"></button>"#
        ));
    }

    #[test]
    fn close_button_removes_alert() {
        let ui = Ui::new();
        let alert = alert("Bye", Category::Info).dismissible(true).build(&ui);
        let body = ui.with_document(|doc| doc.body());
        alert.add_to(body);
        assert!(alert.is_attached());

        let close = alert.close_button().unwrap();
        assert!(ui.click(close).unwrap());

        assert!(!alert.is_attached());
        assert_eq!(ui.binding_count(), 0);
    }
}
