// TextArea Component
// Multi-line text field; fires its callback on every input

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct TextArea {
    base: ComponentBase,
    textarea: NodeId,
}

pub struct TextAreaBuilder {
    caption: String,
    initial_value: String,
    placeholder: String,
    rows: u32,
    callback: Option<Callback<TextArea>>,
}

impl Default for TextAreaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAreaBuilder {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            initial_value: String::new(),
            placeholder: String::new(),
            rows: 3,
            callback: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn on_input<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TextArea, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> TextArea {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::FORM_GROUP);
        let textarea_id = base.id().part("textarea");

        let node = base.node();
        let textarea = ui.with_document_mut(|doc| {
            if !self.caption.is_empty() {
                append_form_label(doc, node, &textarea_id, &self.caption);
            }
            let textarea = create_with_class(doc, "textarea", classes::FORM_CONTROL);
            doc.set_attribute(textarea, "id", &textarea_id);
            doc.set_attribute(textarea, "rows", &self.rows.to_string());
            if !self.placeholder.is_empty() {
                doc.set_attribute(textarea, "placeholder", &self.placeholder);
            }
            append_text(doc, textarea, &self.initial_value);
            doc.append_child(node, textarea);
            textarea
        });

        let component = TextArea { base, textarea };
        if let Some(callback) = self.callback {
            bind_callback(&component, textarea, EventKind::Input, callback);
        }
        component
    }
}

pub fn text_area(caption: impl Into<String>) -> TextAreaBuilder {
    TextAreaBuilder::new().caption(caption)
}

impl TextArea {
    pub fn textarea_node(&self) -> NodeId {
        self.textarea
    }

    pub fn value(&self) -> String {
        self.ui()
            .with_document(|doc| doc.value(self.textarea))
            .unwrap_or_default()
    }

    pub fn set_value(&self, value: &str) {
        self.ui()
            .with_document_mut(|doc| doc.set_value(self.textarea, value));
    }
}

impl Component for TextArea {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textarea_markup() {
        let ui = Ui::new();
        let area = text_area("Multi-line Input")
            .placeholder("Enter a long text...")
            .rows(4)
            .initial_value("draft")
            .build(&ui);
        let id = area.id().part("textarea");
        assert!(area.outer_html().contains(&format!(
            r#"<textarea class="form-control" id="{id}" rows="4" placeholder="Enter a long text...">draft</textarea>"#
        )));
        assert_eq!(area.value(), "draft");
    }

    #[test]
    fn empty_placeholder_is_omitted() {
        let ui = Ui::new();
        let area = text_area("").build(&ui);
        assert!(!area.outer_html().contains("placeholder"));
        assert!(area.outer_html().contains(r#"rows="3""#));
    }

    #[test]
    fn typing_updates_value() {
        let ui = Ui::new();
        let area = text_area("").build(&ui);
        ui.input(area.textarea_node(), "line one\nline two").unwrap();
        assert_eq!(area.value(), "line one\nline two");
    }
}
