// TextInput Component
// Single-line text field; fires its callback on every input

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct TextInput {
    base: ComponentBase,
    input: NodeId,
}

pub struct TextInputBuilder {
    caption: String,
    initial_value: String,
    placeholder: String,
    callback: Option<Callback<TextInput>>,
}

impl Default for TextInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInputBuilder {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            initial_value: String::new(),
            placeholder: String::new(),
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

    pub fn on_input<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TextInput, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> TextInput {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::FORM_GROUP);
        let input_id = base.id().part("input");

        let node = base.node();
        let input = ui.with_document_mut(|doc| {
            if !self.caption.is_empty() {
                append_form_label(doc, node, &input_id, &self.caption);
            }
            let input = doc.create_element("input");
            doc.set_attribute(input, "type", "text");
            doc.set_class(input, classes::FORM_CONTROL);
            doc.set_attribute(input, "id", &input_id);
            doc.set_attribute(input, "value", &self.initial_value);
            if !self.placeholder.is_empty() {
                doc.set_attribute(input, "placeholder", &self.placeholder);
            }
            doc.append_child(node, input);
            input
        });

        let component = TextInput { base, input };
        if let Some(callback) = self.callback {
            bind_callback(&component, input, EventKind::Input, callback);
        }
        component
    }
}

pub fn text_input(caption: impl Into<String>) -> TextInputBuilder {
    TextInputBuilder::new().caption(caption)
}

impl TextInput {
    pub fn input_node(&self) -> NodeId {
        self.input
    }

    pub fn value(&self) -> String {
        self.ui()
            .with_document(|doc| doc.value(self.input))
            .unwrap_or_default()
    }

    pub fn set_value(&self, value: &str) {
        self.ui()
            .with_document_mut(|doc| doc.set_value(self.input, value));
    }
}

impl Component for TextInput {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}
