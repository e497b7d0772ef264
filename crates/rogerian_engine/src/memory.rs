//! Remembered fragments.
//!
//! `memory` directives append reflected captures here. Entries are kept in
//! arrival order for the lifetime of the conversation; the responder never
//! reads them back.

/// Append-only list of remembered fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    entries: Vec<String>,
}

impl Memory {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment. Empty fragments are ignored.
    pub fn remember(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.entries.push(fragment);
        }
    }

    /// All fragments, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
