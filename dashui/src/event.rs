use crate::dom::NodeId;
use std::fmt;

/// The one DOM event type a control listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Input,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Input => "input",
        }
    }

    /// Attribute carrying a named callback, `data-on-click="cb"`.
    pub fn callback_attribute(self) -> &'static str {
        match self {
            EventKind::Click => "data-on-click",
            EventKind::Change => "data-on-change",
            EventKind::Input => "data-on-input",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event object handed to callbacks. `value` and `checked` are snapshots of
/// the target's live properties at dispatch time, the `event.target.value`
/// a browser handler would read.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
    pub value: Option<String>,
    pub checked: bool,
}

impl Event {
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
