// Select Component
// Captioned dropdown; fires its callback on change

use crate::components::base::*;
use crate::dom::NodeId;
use crate::event::{Event, EventKind};
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Select {
    base: ComponentBase,
    select: NodeId,
}

pub struct SelectBuilder {
    caption: String,
    values: Vec<String>,
    labels: Vec<String>,
    initial_value: Option<String>,
    callback: Option<Callback<Select>>,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder {
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

    /// Display text per value. Left empty, the values themselves are shown.
    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.labels = stringify(labels);
        self
    }

    pub fn initial_value(mut self, value: impl ToString) -> Self {
        self.initial_value = Some(value.to_string());
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Select, &Event) + 'static,
    {
        self.callback = Some(Callback::bound(handler));
        self
    }

    pub fn callback_name(mut self, name: impl Into<String>) -> Self {
        self.callback = Some(Callback::named(name));
        self
    }

    pub fn build(self, ui: &Ui) -> Select {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::FORM_GROUP);
        let select_id = base.id().part("select");
        let options = pair_options(ui, base.id(), &self.values, &self.labels);

        let node = base.node();
        let select = ui.with_document_mut(|doc| {
            if !self.caption.is_empty() {
                append_form_label(doc, node, &select_id, &self.caption);
            }
            let select = create_with_class(doc, "select", classes::FORM_SELECT);
            doc.set_attribute(select, "id", &select_id);
            for (value, label) in &options {
                let option = doc.create_element("option");
                doc.set_attribute(option, "value", value);
                if self.initial_value.as_ref() == Some(value) {
                    doc.set_attribute(option, "selected", "");
                }
                append_text(doc, option, label);
                doc.append_child(select, option);
            }
            doc.append_child(node, select);
            select
        });

        let component = Select { base, select };
        if let Some(callback) = self.callback {
            bind_callback(&component, select, EventKind::Change, callback);
        }
        component
    }
}

pub fn select(caption: impl Into<String>) -> SelectBuilder {
    SelectBuilder::new().caption(caption)
}

impl Select {
    /// The `<select>` element inside the wrapper.
    pub fn select_node(&self) -> NodeId {
        self.select
    }

    pub fn value(&self) -> Option<String> {
        self.ui().with_document(|doc| doc.value(self.select))
    }

    /// Change the selection without firing `change`.
    pub fn set_value(&self, value: &str) {
        self.ui()
            .with_document_mut(|doc| doc.set_value(self.select, value));
    }

    /// `(value, label)` of every rendered option, in order.
    pub fn options(&self) -> Vec<(String, String)> {
        self.ui().with_document(|doc| {
            doc.elements_by_tag(self.select, "option")
                .into_iter()
                .map(|option| {
                    (
                        doc.attribute(option, "value").unwrap_or_default().to_string(),
                        doc.text_content(option),
                    )
                })
                .collect()
        })
    }
}

impl Component for Select {
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
    fn labels_default_to_value_strings() {
        let ui = Ui::new();
        let select = select("Number").values([1, 2, 3]).build(&ui);
        assert_eq!(
            select.options(),
            vec![
                ("1".to_string(), "1".to_string()),
                ("2".to_string(), "2".to_string()),
                ("3".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(select.value().as_deref(), Some("1"));
    }

    #[test]
    fn caption_label_points_at_select() {
        let ui = Ui::new();
        let select = select("Favorite Color")
            .values(["red", "blue"])
            .labels(["Red", "Blue"])
            .build(&ui);
        let html = select.outer_html();
        let select_id = select.id().part("select");
        assert!(html.contains(&format!(
            r#"<label class="form-label" for="{select_id}">Favorite Color</label>"#
        )));
        assert!(html.contains(r#"<option value="blue">Blue</option>"#));
    }

    #[test]
    fn no_caption_no_label() {
        let ui = Ui::new();
        let select = SelectBuilder::new().values(["a"]).build(&ui);
        assert!(!select.outer_html().contains("<label"));
    }

    #[test]
    fn initial_value_marks_option_selected() {
        let ui = Ui::new();
        let select = select("")
            .values(["tips", "iris"])
            .initial_value("iris")
            .build(&ui);
        assert_eq!(select.value().as_deref(), Some("iris"));
    }

    #[test]
    fn change_event_reaches_select_callback() {
        let ui = Ui::new();
        let picked = Rc::new(RefCell::new(String::new()));
        let sink = picked.clone();
        let select = select("Dataset")
            .values(["tips", "iris", "gapminder"])
            .on_change(move |select, _| {
                *sink.borrow_mut() = select.value().unwrap_or_default();
            })
            .build(&ui);

        ui.change(select.select_node(), "gapminder").unwrap();
        assert_eq!(*picked.borrow(), "gapminder");
    }

    #[test]
    fn change_to_unknown_value_clears_the_selection() {
        let ui = Ui::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        let select = select("Dataset")
            .values(["tips", "iris"])
            .on_change(move |_, event| *sink.borrow_mut() = Some(event.value().to_string()))
            .build(&ui);

        ui.change(select.select_node(), "zzz").unwrap();

        assert_eq!(select.value(), None);
        assert_eq!(seen.borrow().as_deref(), Some(""));

        select.set_value("iris");
        assert_eq!(select.value().as_deref(), Some("iris"));
    }
}
