// Container Component
// Generic box holding other components and rendered content

use crate::components::base::{Component, ComponentBase};
use crate::components::{banner, Banner, SmallBanner};
use crate::content::{Content, Html, Markdown, RenderContext};
use crate::dom::{Document, NodeId};
use crate::error::{Result, UiError};
use crate::ui::{ComponentId, Diagnostic, Ui};
use std::rc::Rc;

use super::row::{self, Layout};

/// What a container was built as. Rows own their columns for their whole
/// life; the page is the per-`Ui` root.
#[derive(Clone, Debug)]
pub enum ContainerRole {
    Plain,
    Row { columns: Rc<[Container]> },
    Page,
}

#[derive(Clone, Debug)]
pub struct Container {
    base: ComponentBase,
    role: ContainerRole,
}

#[derive(Clone, Debug, Default)]
enum Parent {
    #[default]
    Page,
    Id(String),
    Node(NodeId),
    Detached,
}

#[derive(Default)]
pub struct ContainerBuilder {
    parent: Parent,
    class: Option<String>,
    layout: Option<Layout>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach under the element with this id instead of the page.
    pub fn parent_id(mut self, id: impl Into<String>) -> Self {
        self.parent = Parent::Id(id.into());
        self
    }

    pub fn parent(mut self, parent: &impl Component) -> Self {
        self.parent = Parent::Node(parent.node());
        self
    }

    /// Build without attaching anywhere.
    pub fn detached(mut self) -> Self {
        self.parent = Parent::Detached;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub(crate) fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn build(self, ui: &Ui) -> Result<Container> {
        let parent = match &self.parent {
            Parent::Page => match ui.page_slot() {
                Some((_, node)) => Some(node),
                None => return Err(UiError::ElementNotFound(ui.config().page_id)),
            },
            Parent::Id(id) => Some(
                ui.get_element_by_id(id)
                    .ok_or_else(|| UiError::ElementNotFound(id.clone()))?,
            ),
            Parent::Node(node) => Some(*node),
            Parent::Detached => None,
        };

        let container = match self.layout {
            Some(layout) => row::build(ui, layout, self.class.as_deref()),
            None => Container::plain(ui, self.class.as_deref()),
        };
        if let Some(parent) = parent {
            container.add_to(parent);
        }
        Ok(container)
    }
}

/// A plain container under the page.
pub fn container() -> ContainerBuilder {
    ContainerBuilder::new()
}

impl Container {
    pub(crate) fn plain(ui: &Ui, class: Option<&str>) -> Self {
        let base = ComponentBase::new(ui, "div");
        if let Some(class) = class {
            base.set_class(class);
        }
        Self {
            base,
            role: ContainerRole::Plain,
        }
    }

    pub(crate) fn with_role(base: ComponentBase, role: ContainerRole) -> Self {
        Self { base, role }
    }

    pub(crate) fn page_from_parts(ui: Ui, id: ComponentId, node: NodeId) -> Self {
        Self::with_role(ComponentBase::from_parts(ui, id, node), ContainerRole::Page)
    }

    pub fn role(&self) -> &ContainerRole {
        &self.role
    }

    pub fn is_page(&self) -> bool {
        matches!(self.role, ContainerRole::Page)
    }

    /// Columns of a row, in layout order. Empty for other containers.
    pub fn columns(&self) -> &[Container] {
        match &self.role {
            ContainerRole::Row { columns } => columns,
            _ => &[],
        }
    }

    pub fn column(&self, index: usize) -> Option<&Container> {
        self.columns().get(index)
    }

    // ===== CHILDREN =====

    /// Append `component` as the last child.
    pub fn add(&self, component: &impl Component) -> &Self {
        component.add_to(self.node());
        self
    }

    pub fn children(&self) -> Vec<NodeId> {
        let node = self.node();
        self.ui().with_document(|doc| doc.children(node).to_vec())
    }

    /// Remove every child and release their listeners.
    pub fn clear(&self) -> &Self {
        let node = self.node();
        self.ui().with_state_mut(|state| {
            let removed = state.document.remove_children(node);
            state.release_subtrees(&removed);
        });
        self
    }

    pub fn inner_html(&self) -> String {
        let node = self.node();
        self.ui().with_document(|doc| doc.inner_html(node))
    }

    // ===== CONTENT =====

    /// Render `content` and either append it after the existing children or
    /// replace them. Appending moves the new nodes in one at a time, so the
    /// existing children keep their identity and listeners.
    ///
    /// `content` renders into a scratch document while the `Ui` is not
    /// borrowed, so it may read its own `Ui` handle.
    pub fn disp<C: Content + ?Sized>(&self, content: &C, append: bool) -> &Self {
        let node = self.node();
        let mut scratch = Document::new();
        let rendered = content.render(&mut RenderContext::new(
            &mut scratch,
            self.ui().markdown_options(),
        ));
        self.ui().with_state_mut(|state| {
            let nodes: Vec<NodeId> = rendered
                .iter()
                .filter_map(|child| state.document.import_node(&scratch, *child))
                .collect();
            if !append {
                let removed = state.document.remove_children(node);
                state.release_subtrees(&removed);
            }
            for child in nodes {
                state.document.append_child(node, child);
            }
        });
        self
    }

    /// Escaped plain text in its own `<div>`.
    pub fn write(&self, text: &str, append: bool) -> &Self {
        self.disp(text, append)
    }

    /// Markdown (and inline HTML) converted before insertion.
    pub fn write_html(&self, text: &str, append: bool) -> &Self {
        self.disp(&Markdown(text.to_string()), append)
    }

    /// Trusted markup inserted as-is.
    pub fn write_raw_html(&self, markup: &str, append: bool) -> &Self {
        self.disp(&Html(markup.to_string()), append)
    }

    /// Append an `<hN>` heading. Levels outside 1..=6 are clamped.
    pub fn headertag(&self, text: &str, level: u8) -> &Self {
        let used = level.clamp(1, 6);
        if used != level {
            self.ui().warn(Diagnostic::HeadingLevel {
                requested: level,
                used,
            });
        }
        self.write_html(&format!("<h{used}>{text}</h{used}>"), true)
    }

    pub fn title(&self, text: &str) -> &Self {
        self.headertag(text, 1)
    }

    pub fn header(&self, text: &str) -> &Self {
        self.headertag(text, 2)
    }

    pub fn subheader(&self, text: &str) -> &Self {
        self.headertag(text, 3)
    }

    // ===== SHORTCUTS =====

    /// Add a row laid out by `layout` and return its columns.
    pub fn make_cols(&self, layout: impl Into<Layout>) -> Vec<Container> {
        let row = row::build(self.ui(), layout.into(), None);
        self.add(&row);
        row.columns().to_vec()
    }

    pub fn banner(&self, title: &str, subtitle: Option<&str>) -> Banner {
        let mut builder = banner(title);
        if let Some(subtitle) = subtitle {
            builder = builder.subtitle(subtitle);
        }
        let banner = builder.build(self.ui());
        self.add(&banner);
        banner
    }

    pub fn small_banner(&self, title: &str) -> SmallBanner {
        let banner = SmallBanner::new(self.ui(), title);
        self.add(&banner);
        banner
    }
}

impl Component for Container {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::button;
    use crate::layout::page;

    fn scratch(ui: &Ui) -> Container {
        container().detached().build(ui).unwrap()
    }

    #[test]
    fn default_parent_is_the_page() {
        let ui = Ui::new();
        let err = container().build(&ui).unwrap_err();
        assert!(matches!(err, UiError::ElementNotFound(id) if id == "dash-page"));

        let page = page("Test").build(&ui);
        let child = container().class_name("card").build(&ui).unwrap();
        assert_eq!(page.children(), vec![child.node()]);
        assert_eq!(child.class_name().as_deref(), Some("card"));
    }

    #[test]
    fn missing_parent_id_is_lookup_failure() {
        let ui = Ui::new();
        let err = container().parent_id("nope").build(&ui).unwrap_err();
        assert!(matches!(err, UiError::ElementNotFound(id) if id == "nope"));
    }

    #[test]
    fn add_chains_in_order() {
        let ui = Ui::new();
        let outer = scratch(&ui);
        let a = button("A").build(&ui);
        let b = button("B").build(&ui);
        outer.add(&a).add(&b);
        assert_eq!(outer.children(), vec![a.node(), b.node()]);
    }

    #[test]
    fn write_wraps_each_call_in_a_div() {
        let ui = Ui::new();
        let out = scratch(&ui);
        out.write("one", true).write("<two>", true);
        assert_eq!(out.inner_html(), "<div>one</div><div>&lt;two&gt;</div>");
        out.write("three", false);
        assert_eq!(out.inner_html(), "<div>three</div>");
    }

    #[test]
    fn write_html_replace_shows_only_new_markdown() {
        let ui = Ui::new();
        let out = scratch(&ui);
        out.write("old", true);
        out.write_html("# Title\n\nSome *text*", false);
        assert_eq!(out.inner_html(), "<h1>Title</h1>\n<p>Some <em>text</em></p>");
    }

    #[test]
    fn write_html_append_keeps_existing_children() {
        let ui = Ui::new();
        let out = scratch(&ui);
        let first = button("Keep").on_click(|_, _| {}).build(&ui);
        out.add(&first);
        out.write("second", true);
        let before = out.children();

        out.write_html("*a*\n\n*b*", true);

        let after = out.children();
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.len(), before.len() + 3);
        assert!(ui.is_bound(first.id()));
    }

    #[test]
    fn replace_releases_listeners() {
        let ui = Ui::new();
        let out = scratch(&ui);
        let button = button("Gone").on_click(|_, _| {}).build(&ui);
        out.add(&button);
        out.write_html("fresh", false);
        assert!(!ui.is_bound(button.id()));
    }

    #[test]
    fn clear_empties_and_releases() {
        let ui = Ui::new();
        let out = scratch(&ui);
        let button = button("Gone").on_click(|_, _| {}).build(&ui);
        out.add(&button).write("text", true);
        out.clear();
        assert!(out.children().is_empty());
        assert_eq!(ui.binding_count(), 0);
    }

    #[test]
    fn heading_levels() {
        let ui = Ui::new();
        let out = scratch(&ui);
        out.title("T").header("H").subheader("S");
        assert_eq!(out.inner_html(), "<h1>T</h1><h2>H</h2><h3>S</h3>");

        out.clear().headertag("deep", 9);
        assert_eq!(out.inner_html(), "<h6>deep</h6>");
        assert_eq!(
            ui.diagnostics(),
            vec![Diagnostic::HeadingLevel {
                requested: 9,
                used: 6
            }]
        );
    }

    #[test]
    fn make_cols_returns_row_columns() {
        let ui = Ui::new();
        let out = scratch(&ui);
        let cols = out.make_cols(Layout::Widths(vec![4, 8]));
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[1].class_name().as_deref(), Some("col-8"));
        let row = out.children()[0];
        assert_eq!(ui.with_document(|doc| doc.parent(cols[0].node())), Some(row));
    }

    #[test]
    fn banners_are_appended() {
        let ui = Ui::new();
        let out = scratch(&ui);
        let big = out.banner("Dash", Some("demo"));
        let small = out.small_banner("Part");
        assert_eq!(out.children(), vec![big.node(), small.node()]);
    }

    struct TitleEcho(Ui);

    impl Content for TitleEcho {
        fn render(&self, cx: &mut RenderContext<'_>) -> Vec<NodeId> {
            let title = self.0.title();
            cx.text_block(&format!("title is {title}"))
        }
    }

    #[test]
    fn content_may_read_its_own_ui_while_rendering() {
        let ui = Ui::new();
        ui.set_title("Report");
        let out = scratch(&ui);
        out.disp(&TitleEcho(ui.clone()), true);
        assert_eq!(out.inner_html(), "<div>title is Report</div>");
    }

    #[test]
    fn repeated_replace_keeps_node_count_bounded() {
        let ui = Ui::new();
        let page = page("Loop").build(&ui);
        let out = container().build(&ui).unwrap();
        out.write_html("warm *up*", false);
        let live = ui.with_document(Document::live_nodes);
        let allocated = ui.with_document(Document::allocated);

        for i in 0..1000 {
            out.write_html(&format!("**step** {i} of [many](#end)"), false);
        }

        assert!(ui.with_document(Document::live_nodes) <= live + 4);
        assert!(ui.with_document(Document::allocated) <= allocated + 32);
        assert!(page.inner_html().contains("step</strong> 999"));
    }
}
