//! Manifest entry type describing one collection.

use serde::{Deserialize, Serialize};

/// One line of the manifest: a named collection and its document count.
///
/// `size` must equal the number of document lines in the collection's backing
/// file after every successful mutation. It is re-derived on every document
/// add/delete rather than trusted blindly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub size: u64,
}

impl CollectionEntry {
    /// Creates an entry for a freshly created, empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), size: 0 }
    }

    /// Returns this entry with the document count bumped by one.
    pub fn incremented(mut self) -> Self {
        self.size += 1;
        self
    }

    /// Returns this entry with the document count lowered by one.
    ///
    /// Saturates at zero so a drifted manifest can never underflow.
    pub fn decremented(mut self) -> Self {
        self.size = self.size.saturating_sub(1);
        self
    }
}
