// Markdown conversion
// Raw HTML in the source passes through untouched; nothing is sanitized.

use crate::config::MarkdownOptions;
use pulldown_cmark::{html, Options, Parser};

impl MarkdownOptions {
    fn to_pulldown(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

/// Render `text` to an HTML fragment. Trailing whitespace is trimmed so the
/// fragment does not end in a dangling newline text node.
pub fn to_html(text: &str, options: MarkdownOptions) -> String {
    let parser = Parser::new_ext(text, options.to_pulldown());
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}
