use std::fmt;

/// Opaque component identifier, also used as the element's `id` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(String);

impl ComponentId {
    pub(crate) fn fixed(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of a nested element, `<id>-<part>`.
    pub fn part(&self, part: impl fmt::Display) -> String {
        format!("{}-{part}", self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Monotonic per-Ui counter; ids are never reused
#[derive(Debug)]
pub(crate) struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub(crate) fn allocate(&mut self) -> ComponentId {
        let id = ComponentId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_hands_out_distinct_ids() {
        let mut ids = IdAllocator::new("dash");
        let first = ids.allocate();
        let second = ids.allocate();
        assert_eq!(first.as_str(), "dash-1");
        assert_eq!(second.as_str(), "dash-2");
        assert_eq!(first.part("select"), "dash-1-select");
    }
}
