use crate::error::Result;
use crate::tokens::PageWidth;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ID_PREFIX: &str = "dash";
pub const DEFAULT_PAGE_ID: &str = "dash-page";
pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

// ===== CONFIG TYPES =====

/// Runtime configuration for a [`crate::Ui`].
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// id_prefix = "sales"
/// default_width = "wide"
///
/// [markdown]
/// tables = false
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix of every generated component id, `<prefix>-<n>`.
    pub id_prefix: String,
    /// Fixed id of the singleton page element.
    pub page_id: String,
    pub default_width: PageWidth,
    pub language: String,
    /// Stylesheet links emitted into `<head>`.
    pub stylesheets: Vec<String>,
    /// Deferred scripts emitted into `<head>`.
    pub scripts: Vec<String>,
    pub markdown: MarkdownOptions,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            page_id: DEFAULT_PAGE_ID.to_string(),
            default_width: PageWidth::Narrow,
            language: "en".to_string(),
            stylesheets: vec![BOOTSTRAP_CSS.to_string()],
            scripts: vec![BOOTSTRAP_JS.to_string()],
            markdown: MarkdownOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: false,
        }
    }
}

impl UiConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("loaded ui config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = UiConfig::from_toml_str(
            r#"
            id_prefix = "sales"
            default_width = "wide"

            [markdown]
            tables = false
            "#,
        )
        .unwrap();

        assert_eq!(config.id_prefix, "sales");
        assert_eq!(config.default_width, PageWidth::Wide);
        assert!(!config.markdown.tables);
        assert!(config.markdown.strikethrough);
        assert_eq!(config.page_id, DEFAULT_PAGE_ID);
    }

    #[test]
    fn config_survives_toml_round_trip() {
        let mut config = UiConfig::default();
        config.stylesheets.push("theme.css".to_string());
        let text = config.to_toml_string().unwrap();
        assert_eq!(UiConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn bad_width_is_a_config_error() {
        let err = UiConfig::from_toml_str("default_width = \"huge\"").unwrap_err();
        assert!(matches!(err, crate::UiError::Config(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_id = \"root\"").unwrap();
        let config = UiConfig::load(file.path()).unwrap();
        assert_eq!(config.page_id, "root");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = UiConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, crate::UiError::Io(_)));
    }
}
