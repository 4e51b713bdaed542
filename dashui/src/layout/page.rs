// Page Component
// Singleton root container attached to <body>; owns the document title

use super::container::Container;
use crate::tokens::PageWidth;
use crate::ui::{ComponentId, Ui};

pub struct PageBuilder {
    title: String,
    width: Option<PageWidth>,
}

impl PageBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: None,
        }
    }

    /// Defaults to `UiConfig::default_width`. Ignored when the page exists.
    pub fn width(mut self, width: PageWidth) -> Self {
        self.width = Some(width);
        self
    }

    /// Return the page of `ui`, creating it on first use. Every call sets
    /// the document title, so the latest one wins.
    pub fn build(self, ui: &Ui) -> Container {
        ui.set_title(&self.title);

        if let Some((id, node)) = ui.page_slot() {
            log::debug!("adopting page {id}");
            return Container::page_from_parts(ui.clone(), id, node);
        }

        let config = ui.config();
        let id = ComponentId::fixed(config.page_id.clone());
        if let Some(node) = ui.get_element_by_id(id.as_str()) {
            log::debug!("adopting existing #{id} as page");
            ui.set_page_slot(id.clone(), node);
            return Container::page_from_parts(ui.clone(), id, node);
        }

        let node = ui.with_document_mut(|doc| {
            let node = doc.create_element("div");
            doc.set_attribute(node, "id", id.as_str());
            if let Some(class) = self.width.unwrap_or(config.default_width).class() {
                doc.set_class(node, class);
            }
            let body = doc.body();
            doc.append_child(body, node);
            node
        });
        ui.set_page_slot(id.clone(), node);
        log::debug!("created page {id}");
        Container::page_from_parts(ui.clone(), id, node)
    }
}

pub fn page(title: impl Into<String>) -> PageBuilder {
    PageBuilder::new(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Component;

    #[test]
    fn page_twice_is_one_element_with_latest_title() {
        let ui = Ui::new();
        let first = page("First").build(&ui);
        let second = page("Second").width(PageWidth::Wide).build(&ui);

        assert_eq!(first.node(), second.node());
        assert_eq!(ui.title(), "Second");
        let pages = ui.with_document(|doc| {
            doc.descendants(doc.body())
                .into_iter()
                .filter(|node| doc.attribute(*node, "id") == Some("dash-page"))
                .count()
        });
        assert_eq!(pages, 1);
        assert!(second.is_page());
    }

    #[test]
    fn narrow_page_is_a_bootstrap_container() {
        let ui = Ui::new();
        let page = page("P").build(&ui);
        assert_eq!(page.class_name().as_deref(), Some("container"));
        assert!(page.is_attached());
        assert_eq!(ui.page().map(|p| p.node()), Some(page.node()));
    }

    #[test]
    fn wide_page_has_no_class() {
        let ui = Ui::new();
        let page = page("P").width(PageWidth::Wide).build(&ui);
        assert_eq!(page.class_name(), None);
    }

    #[test]
    fn no_page_until_built() {
        let ui = Ui::new();
        assert!(ui.page().is_none());
    }
}
