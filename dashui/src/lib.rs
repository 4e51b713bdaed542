//! Declarative Bootstrap components for browser-resident dashboards.
//!
//! Every component is a builder that creates a few elements in the
//! [`Ui`]'s document, gives the outer one a unique id and optionally binds
//! one event listener to a user callback. Containers hold components and
//! rendered content; rows split into columns; the page is the singleton
//! root under `<body>`.
//!
//! ```
//! use dashui::prelude::*;
//!
//! let ui = Ui::new();
//! let page = page("Demo").build(&ui);
//! let cols = page.make_cols(Layout::Equal(2));
//! let out = container().parent(&cols[1]).build(&ui)?;
//! let out_handle = out.clone();
//! cols[0].add(&button("Press").on_click(move |button, _| {
//!     out_handle.write(&button.value(), false);
//! }).build(&ui));
//!
//! let pressed = ui.with_document(|doc| doc.elements_by_tag(doc.body(), "button"))[0];
//! ui.click(pressed)?;
//! assert_eq!(out.inner_html(), "<div>pressed</div>");
//! # Ok::<(), dashui::UiError>(())
//! ```
//!
//! Natively the document lives in memory and is exported with
//! [`Ui::to_html`]. Built for `wasm32` with the `web` feature,
//! `Ui::mount` puts it on the running page and keeps the page in step.

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod event;
pub mod layout;
pub mod markdown;
pub mod tokens;
pub mod ui;

pub use config::{MarkdownOptions, UiConfig};
pub use content::{Content, Html, Markdown, RenderContext};
pub use error::{Result, UiError};
pub use event::{Event, EventKind};
pub use ui::{ComponentId, Diagnostic, Ui};
#[cfg(feature = "web")]
pub use ui::WebMount;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::content::{Content, Html, Markdown, RenderContext};
    pub use crate::event::{Event, EventKind};
    pub use crate::layout::*;
    pub use crate::tokens::{Category, PageWidth};
    pub use crate::ui::{Diagnostic, Ui};
    pub use crate::UiConfig;
}
