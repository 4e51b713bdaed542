//! Anything a [`Container`](crate::layout::Container) can display.
//!
//! `disp` renders a [`Content`] into a scratch document and then imports the
//! nodes into the container. No `Ui` borrow is held while rendering, so
//! content may read its own [`Ui`](crate::Ui). Plain values become one
//! `<div>` of escaped text per call; [`Html`] is parsed as-is and
//! [`Markdown`] is converted first. Types outside
//! the crate (charts, tables) implement [`Content`] to show up the same way.

use crate::config::MarkdownOptions;
use crate::dom::{Document, NodeId};
use crate::markdown;

/// What a [`Content`] renders with: the document to allocate nodes in and
/// the markdown settings of the owning [`Ui`](crate::Ui).
pub struct RenderContext<'a> {
    doc: &'a mut Document,
    markdown: MarkdownOptions,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(doc: &'a mut Document, markdown: MarkdownOptions) -> Self {
        Self { doc, markdown }
    }

    pub fn document(&mut self) -> &mut Document {
        self.doc
    }

    /// Parse trusted markup into detached top-level nodes.
    pub fn html(&mut self, markup: &str) -> Vec<NodeId> {
        self.doc.parse_fragment(markup)
    }

    pub fn markdown(&mut self, text: &str) -> Vec<NodeId> {
        let markup = markdown::to_html(text, self.markdown);
        self.doc.parse_fragment(&markup)
    }

    /// One `<div>` holding `text` as a text node.
    pub fn text_block(&mut self, text: &str) -> Vec<NodeId> {
        let div = self.doc.create_element("div");
        let text = self.doc.create_text(text);
        self.doc.append_child(div, text);
        vec![div]
    }
}

pub trait Content {
    /// Build detached nodes; the caller attaches them in order.
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId>;
}

/// Trusted markup inserted without conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Html(pub String);

/// Markdown source, converted on render.
#[derive(Clone, Debug, PartialEq)]
pub struct Markdown(pub String);

impl Content for Html {
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
        cx.html(&self.0)
    }
}

impl Content for Markdown {
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
        cx.markdown(&self.0)
    }
}

impl Content for str {
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
        cx.text_block(self)
    }
}

impl Content for String {
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
        cx.text_block(self)
    }
}

impl<T: Content + ?Sized> Content for &T {
    fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
        (**self).render(cx)
    }
}

macro_rules! display_content {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Content for $ty {
                fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
                    cx.text_block(&self.to_string())
                }
            }
        )*
    };
}

display_content!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &dyn Content) -> String {
        let mut doc = Document::new();
        let host = doc.create_element("div");
        let nodes = {
            let mut cx = RenderContext::new(&mut doc, MarkdownOptions::default());
            content.render(&mut cx)
        };
        for node in nodes {
            doc.append_child(host, node);
        }
        doc.inner_html(host)
    }

    #[test]
    fn text_is_escaped_inside_a_div() {
        assert_eq!(render(&"a < b"), "<div>a &lt; b</div>");
        assert_eq!(render(&42), "<div>42</div>");
        assert_eq!(render(&1.5), "<div>1.5</div>");
    }

    #[test]
    fn html_is_parsed_verbatim() {
        let html = Html(r#"<span class="x">hi</span>"#.to_string());
        assert_eq!(render(&html), r#"<span class="x">hi</span>"#);
    }

    #[test]
    fn markdown_is_converted() {
        let markdown = Markdown("**bold**".to_string());
        assert_eq!(render(&markdown), "<p><strong>bold</strong></p>");
    }
}
