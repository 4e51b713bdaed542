use serde::{Deserialize, Serialize};
use std::fmt;

// Contextual color category, shared by alerts and anything else that takes
// an `alert-*`/`btn-*` style suffix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Primary,
        Category::Secondary,
        Category::Success,
        Category::Danger,
        Category::Warning,
        Category::Info,
        Category::Light,
        Category::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Secondary => "secondary",
            Category::Success => "success",
            Category::Danger => "danger",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::Light => "light",
            Category::Dark => "dark",
        }
    }

    pub fn alert_class(self) -> String {
        format!("alert alert-{}", self.as_str())
    }

    pub fn button_class(self) -> String {
        format!("btn btn-{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_class_uses_category_suffix() {
        assert_eq!(Category::Danger.alert_class(), "alert alert-danger");
        assert_eq!(Category::default().alert_class(), "alert alert-primary");
    }

    #[test]
    fn button_class_uses_category_suffix() {
        assert_eq!(Category::Success.button_class(), "btn btn-success");
    }
}
