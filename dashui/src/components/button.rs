// Button Component
// Bootstrap push button; fires its callback on click

use crate::components::base::*;
use crate::event::{Event, EventKind};
use crate::tokens::{classes, Category};
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Button {
    base: ComponentBase,
}

pub struct ButtonBuilder {
    caption: String,
    value: String,
    class: String,
    callback: Option<Callback<Button>>,
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            caption: "Button".to_string(),
            value: "pressed".to_string(),
            class: classes::BUTTON_PRIMARY.to_string(),
            callback: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Replace the default `btn btn-primary` class string.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.class = category.button_class();
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Button, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> Button {
        let base = ComponentBase::new(ui, "button");
        let node = base.node();
        base.set_class(&self.class);
        ui.with_document_mut(|doc| {
            doc.set_attribute(node, "type", "button");
            doc.set_attribute(node, "value", &self.value);
            append_text(doc, node, &self.caption);
        });

        let button = Button { base };
        if let Some(callback) = self.callback {
            bind_callback(&button, node, EventKind::Click, callback);
        }
        button
    }
}

pub fn button(caption: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder::new().caption(caption)
}

impl Button {
    pub fn caption(&self) -> String {
        let node = self.node();
        self.ui().with_document(|doc| doc.text_content(node))
    }

    pub fn value(&self) -> String {
        let node = self.node();
        self.ui()
            .with_document(|doc| doc.value(node))
            .unwrap_or_default()
    }
}

impl Component for Button {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}
