// Banner Components
// Full-width colored title strips, large and small

use crate::components::base::*;
use crate::tokens::classes;
use crate::ui::Ui;

#[derive(Clone, Debug)]
pub struct Banner {
    base: ComponentBase,
}

pub struct BannerBuilder {
    title: String,
    subtitle: Option<String>,
}

impl BannerBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn build(self, ui: &Ui) -> Banner {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::BANNER);
        let node = base.node();
        ui.with_document_mut(|doc| {
            let title = create_with_class(doc, "div", classes::BANNER_TITLE);
            append_text(doc, title, &self.title);
            doc.append_child(node, title);
            if let Some(subtitle) = &self.subtitle {
                let lead = create_with_class(doc, "div", classes::BANNER_SUBTITLE);
                append_text(doc, lead, subtitle);
                doc.append_child(node, lead);
            }
        });
        Banner { base }
    }
}

pub fn banner(title: impl Into<String>) -> BannerBuilder {
    BannerBuilder::new(title)
}

impl Component for Banner {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[derive(Clone, Debug)]
pub struct SmallBanner {
    base: ComponentBase,
}

impl SmallBanner {
    pub fn new(ui: &Ui, title: &str) -> Self {
        let base = ComponentBase::new(ui, "div");
        base.set_class(classes::SMALL_BANNER);
        let node = base.node();
        ui.with_document_mut(|doc| {
            let heading = create_with_class(doc, "div", classes::SMALL_BANNER_TITLE);
            append_text(doc, heading, title);
            doc.append_child(node, heading);
        });
        Self { base }
    }
}

impl Component for SmallBanner {
    fn base(&self) -> &ComponentBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_omitted_when_absent() {
        let ui = Ui::new();
        let banner = banner("Sales").build(&ui);
        assert_eq!(
            banner.outer_html(),
            format!(
                r#"<div id="{}" class="bg-primary text-center text-white p-2 my-2"><div class="display-3">Sales</div></div>"#,
                banner.id()
            )
        );
    }

    #[test]
    fn subtitle_rendered_as_lead() {
        let ui = Ui::new();
        let banner = banner("Sales").subtitle("Q3").build(&ui);
        assert!(banner.outer_html().ends_with(r#"<div class="lead">Q3</div></div>"#));
    }

    #[test]
    fn small_banner_markup() {
        let ui = Ui::new();
        let banner = SmallBanner::new(&ui, "Details");
        assert_eq!(
            banner.outer_html(),
            format!(
                r#"<div id="{}" class="bg-primary text-center text-white p-2 my-1"><div class="display-4">Details</div></div>"#,
                banner.id()
            )
        );
    }
}
