// Checkbox Component
// Labelled checkbox; fires its callback on change

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Checkbox {
    base: ComponentBase,
    input: NodeId,
}

pub struct CheckboxBuilder {
    label: String,
    value: Option<String>,
    checked: bool,
    callback: Option<Callback<Checkbox>>,
}

impl Default for CheckboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckboxBuilder {
    pub fn new() -> Self {
        Self {
            label: String::new(),
            value: None,
            checked: false,
            callback: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn value(mut self, value: impl ToString) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Checkbox, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> Checkbox {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::FORM_CHECK);
        let checkbox_id = base.id().part("checkbox");

        let node = base.node();
        let input = ui.with_document_mut(|doc| {
            let input = create_with_class(doc, "input", classes::FORM_CHECK_INPUT);
            doc.set_attribute(input, "type", "checkbox");
            if let Some(value) = &self.value {
                doc.set_attribute(input, "value", value);
            }
            doc.set_attribute(input, "id", &checkbox_id);
            if self.checked {
                doc.set_attribute(input, "checked", "");
            }

            let label = create_with_class(doc, "label", classes::FORM_CHECK_LABEL);
            doc.set_attribute(label, "for", &checkbox_id);
            append_text(doc, label, &self.label);

            doc.append_child(node, input);
            doc.append_child(node, label);
            input
        });

        let component = Checkbox { base, input };
        if let Some(callback) = self.callback {
            bind_callback(&component, input, EventKind::Change, callback);
        }
        component
    }
}

pub fn checkbox(label: impl Into<String>) -> CheckboxBuilder {
    CheckboxBuilder::new().label(label)
}

impl Checkbox {
    pub fn input_node(&self) -> NodeId {
        self.input
    }

    pub fn is_checked(&self) -> bool {
        self.ui().with_document(|doc| doc.checked(self.input))
    }

    pub fn set_checked(&self, checked: bool) {
        self.ui()
            .with_document_mut(|doc| doc.set_checked(self.input, checked));
    }

    pub fn value(&self) -> Option<String> {
        self.ui().with_document(|doc| doc.value(self.input))
    }
}

impl Component for Checkbox {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}
