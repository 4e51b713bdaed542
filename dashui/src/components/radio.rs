// RadioGroup Component
// Fieldset of mutually exclusive radio buttons sharing one group name

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct RadioGroup {
    base: ComponentBase,
    radios: Vec<NodeId>,
}

pub struct RadioGroupBuilder {
    caption: String,
    values: Vec<String>,
    labels: Vec<String>,
    initial_value: Option<String>,
    callback: Option<Callback<RadioGroup>>,
}

impl Default for RadioGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioGroupBuilder {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            values: Vec::new(),
            labels: Vec::new(),
            initial_value: None,
            callback: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn values<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.values = stringify(values);
        self
    }

    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.labels = stringify(labels);
        self
    }

    /// Checked option, matched against the values as strings.
    pub fn initial_value(mut self, value: impl ToString) -> Self {
        self.initial_value = Some(value.to_string());
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RadioGroup, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> RadioGroup {
        let base = ComponentBase::new(ui, "fieldset");
        base.set_class(classes::FORM_GROUP);
        let group_name = base.id().part("radiogroup");
        let options = pair_options(ui, base.id(), &self.values, &self.labels);

        let node = base.node();
        let id = base.id().clone();
        let radios = ui.with_document_mut(|doc| {
            if !self.caption.is_empty() {
                let legend = create_with_class(doc, "legend", classes::FIELDSET_LEGEND);
                append_text(doc, legend, &self.caption);
                doc.append_child(node, legend);
            }

            let mut radios = Vec::with_capacity(options.len());
            for (index, (value, label)) in options.iter().enumerate() {
                let wrapper = create_with_class(doc, "div", classes::FORM_CHECK);
                let radio_id = id.part(format!("radio-{index}"));

                let input = create_with_class(doc, "input", classes::FORM_CHECK_INPUT);
                doc.set_attribute(input, "type", "radio");
                doc.set_attribute(input, "name", &group_name);
                doc.set_attribute(input, "id", &radio_id);
                doc.set_attribute(input, "value", value);
                if self.initial_value.as_ref() == Some(value) {
                    doc.set_attribute(input, "checked", "");
                }

                let label_node = create_with_class(doc, "label", classes::FORM_CHECK_LABEL);
                doc.set_attribute(label_node, "for", &radio_id);
                append_text(doc, label_node, label);

                doc.append_child(wrapper, input);
                doc.append_child(wrapper, label_node);
                doc.append_child(node, wrapper);
                radios.push(input);
            }
            radios
        });

        let group = RadioGroup { base, radios };
        if let Some(callback) = self.callback {
            for radio in &group.radios {
                bind_callback(&group, *radio, EventKind::Change, callback.clone());
            }
        }
        group
    }
}

pub fn radio_group(caption: impl Into<String>) -> RadioGroupBuilder {
    RadioGroupBuilder::new().caption(caption)
}

impl RadioGroup {
    pub fn radio_nodes(&self) -> &[NodeId] {
        &self.radios
    }

    /// Value of the checked radio, if any.
    pub fn selected(&self) -> Option<String> {
        self.ui().with_document(|doc| {
            self.radios
                .iter()
                .copied()
                .find(|radio| doc.checked(*radio))
                .and_then(|radio| doc.value(radio))
        })
    }

    /// The radio whose value is `value`.
    pub fn radio_for(&self, value: &str) -> Option<NodeId> {
        self.ui().with_document(|doc| {
            self.radios
                .iter()
                .copied()
                .find(|radio| doc.attribute(*radio, "value") == Some(value))
        })
    }
}

impl Component for RadioGroup {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn options_share_group_name() {
        let ui = Ui::new();
        let group = radio_group("Choose one letter").values(['A', 'B', 'C']).build(&ui);
        let names: Vec<String> = ui.with_document(|doc| {
            group
                .radio_nodes()
                .iter()
                .map(|radio| doc.attribute(*radio, "name").unwrap_or_default().to_string())
                .collect()
        });
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|name| *name == group.id().part("radiogroup")));
        assert!(group.outer_html().contains(r#"<legend class="col-form-label pt-0">Choose one letter</legend>"#));
    }

    #[test]
    fn initial_value_matches_by_string() {
        let ui = Ui::new();
        let group = radio_group("").values([1, 2, 3]).initial_value(2).build(&ui);
        assert_eq!(group.selected().as_deref(), Some("2"));
    }

    #[test]
    fn choosing_is_mutually_exclusive() {
        let ui = Ui::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let group = radio_group("")
            .values(['A', 'B', 'C'])
            .initial_value('B')
            .on_change(move |group, event| {
                sink.borrow_mut()
                    .push((event.value().to_string(), group.selected()));
            })
            .build(&ui);

        let c = group.radio_for("C").unwrap();
        assert!(ui.choose(c).unwrap());
        assert!(!ui.choose(c).unwrap());

        assert_eq!(group.selected().as_deref(), Some("C"));
        let checked = ui.with_document(|doc| {
            group.radio_nodes().iter().filter(|radio| doc.checked(**radio)).count()
        });
        assert_eq!(checked, 1);
        assert_eq!(*seen.borrow(), vec![("C".to_string(), Some("C".to_string()))]);
    }
}
