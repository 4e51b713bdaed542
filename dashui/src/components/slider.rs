// Slider Component
// Range input; fires its callback on change

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Slider {
    base: ComponentBase,
    input: NodeId,
}

pub struct SliderBuilder {
    caption: String,
    min: f64,
    max: f64,
    step: f64,
    initial_value: Option<f64>,
    callback: Option<Callback<Slider>>,
}

impl Default for SliderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderBuilder {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            initial_value: None,
            callback: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Starting position. Defaults to the minimum.
    pub fn initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Slider, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> Slider {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::FORM_GROUP);
        let slider_id = base.id().part("slider");
        let initial = self.initial_value.unwrap_or(self.min);

        let node = base.node();
        let input = ui.with_document_mut(|doc| {
            if !self.caption.is_empty() {
                append_form_label(doc, node, &slider_id, &self.caption);
            }
            let input = doc.create_element("input");
            doc.set_attribute(input, "type", "range");
            doc.set_class(input, classes::FORM_RANGE);
            doc.set_attribute(input, "id", &slider_id);
            doc.set_attribute(input, "min", &format_number(self.min));
            doc.set_attribute(input, "max", &format_number(self.max));
            doc.set_attribute(input, "step", &format_number(self.step));
            doc.set_attribute(input, "value", &format_number(initial));
            doc.append_child(node, input);
            input
        });

        let component = Slider { base, input };
        if let Some(callback) = self.callback {
            bind_callback(&component, input, EventKind::Change, callback);
        }
        component
    }
}

pub fn slider(caption: impl Into<String>) -> SliderBuilder {
    SliderBuilder::new().caption(caption)
}

// Whole numbers print without a fractional part, like the browser does
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl Slider {
    pub fn input_node(&self) -> NodeId {
        self.input
    }

    pub fn value(&self) -> Option<f64> {
        self.ui()
            .with_document(|doc| doc.value(self.input))
            .and_then(|value| value.parse().ok())
    }

    pub fn set_value(&self, value: f64) {
        self.ui()
            .with_document_mut(|doc| doc.set_value(self.input, &format_number(value)));
    }
}

impl Component for Slider {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}
