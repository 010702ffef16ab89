//! The monitor's only mutable state: the last observed address.

/// Last successfully observed external address.
///
/// Only constructed from a successful lookup, so it always holds a
/// non-empty address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    current: String,
}

impl MonitorState {
    /// Creates the state from the baseline address.
    #[must_use]
    pub fn new(baseline: impl Into<String>) -> Self {
        Self {
            current: baseline.into(),
        }
    }

    /// Returns the stored address.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Records a freshly fetched address.
    ///
    /// Returns the previous address if it differed, `None` otherwise.
    pub fn observe(&mut self, address: String) -> Option<String> {
        if address == self.current {
            return None;
        }
        Some(std::mem::replace(&mut self.current, address))
    }
}
