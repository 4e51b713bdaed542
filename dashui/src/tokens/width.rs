use serde::{Deserialize, Serialize};

/// Page presentation: centered with a bounded width, or edge to edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageWidth {
    #[default]
    Narrow,
    Wide,
}

impl PageWidth {
    pub fn class(self) -> Option<&'static str> {
        match self {
            PageWidth::Narrow => Some(super::classes::PAGE_NARROW),
            PageWidth::Wide => None,
        }
    }
}
