//! Demo dashboards for `dashui`.
//!
//! Each demo in [`demos::DEMOS`] builds its page on a fresh [`dashui::Ui`];
//! the `dashui-demos` binary renders them to standalone HTML files.

pub mod chart;
pub mod datasets;
pub mod demos;

use anyhow::{Context, Result};
use dashui::{Ui, UiConfig};
use std::path::Path;

/// Build `name` on a new `Ui` configured by `config`, optionally replaying
/// its scripted interactions, and return the exported document.
pub fn render_demo(name: &str, config: UiConfig, simulate: bool) -> Result<String> {
    let demo = demos::find(name).with_context(|| {
        let known: Vec<_> = demos::DEMOS.iter().map(|demo| demo.name).collect();
        format!("unknown demo `{name}` (available: {})", known.join(", "))
    })?;

    let ui = Ui::with_config(config);
    let run = if simulate { demo.simulate } else { demo.render };
    run(&ui).with_context(|| format!("building demo `{name}`"))?;

    for diagnostic in ui.diagnostics() {
        log::info!("{name}: {diagnostic}");
    }
    Ok(ui.to_html())
}

pub fn load_config(path: Option<&Path>) -> Result<UiConfig> {
    match path {
        Some(path) => UiConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(UiConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_demo_lists_available_ones() {
        let err = render_demo("nope", UiConfig::default(), false).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("unknown demo `nope`"));
        assert!(message.contains("kitchen-sink"));
    }

    #[test]
    fn config_file_changes_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id_prefix = \"demo\"\ndefault_width = \"wide\"").unwrap();
        let config = load_config(Some(file.path())).unwrap();

        let html = render_demo("modal", config, false).unwrap();
        assert!(html.contains(r#"<div id="dash-page"><div id="demo-1" class="modal fade""#));
    }
}
