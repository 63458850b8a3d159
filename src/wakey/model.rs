//! Entries and the two title canonicalizations.
//!
//! Titles are case-insensitive. They are folded to lowercase to derive the key an
//! entry is stored under, and to uppercase whenever a title is handed back to a
//! caller. Both folds happen inside the store; nothing above it changes case.

use serde::{Deserialize, Serialize};

/// The key an entry is persisted under.
pub fn storage_key(title: &str) -> String {
    title.to_lowercase()
}

/// The title as returned to callers.
pub fn display_title(title: &str) -> String {
    title.to_uppercase()
}

/// A single markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub contents: String,
}

impl Entry {
    /// Builds an entry, canonicalizing `title` to its display form.
    pub fn new(title: &str, contents: impl Into<String>) -> Self {
        Self {
            title: display_title(title),
            contents: contents.into(),
        }
    }
}

/// Every title currently in a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryListing {
    #[serde(rename = "Entries")]
    pub entries: Vec<String>,
}

/// An entry whose contents went through the markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub title: String,
    pub html: String,
}
