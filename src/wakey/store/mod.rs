//! # Storage Layer
//!
//! This module defines the storage abstraction for wakey. The [`EntryStore`] trait
//! maps a case-insensitive title to a single markdown document.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per entry: `{lowercase title}{ext}`
//!   - File content is the raw markdown, no header or metadata
//!   - Configurable file extension (`.md` by default)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for tests and embedding
//!   - No persistence
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! data/
//! ├── recipe.md       # entry RECIPE
//! └── todo.md         # entry TODO
//! ```
//!
//! ## Concurrency
//!
//! Stores take `&self` everywhere and perform no coordination between callers.
//! Two writes to the same title race; the last one to land wins and nobody is told.

use crate::error::Result;
use crate::model::{display_title, storage_key, Entry};

pub mod fs;
pub mod memory;

/// Abstract interface for entry storage.
///
/// Implementations canonicalize titles themselves: keys are derived with
/// [`crate::model::storage_key`] and every returned title is a
/// [`crate::model::display_title`].
pub trait EntryStore: Send + Sync {
    /// Display titles of every stored entry, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Fetch an entry, failing with `NotFound` when it does not exist.
    fn read(&self, title: &str) -> Result<Entry>;

    /// Create or fully replace an entry, failing with `WriteFailed` on any I/O error.
    fn write(&self, title: &str, contents: &str) -> Result<Entry>;
}

/// Whether a storage key can name a file directly inside the store root.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '\\', '\0'])
}

/// Whether reading back the display title of `key` lands on `key` again.
///
/// Only such keys are listed. A key like `straße` is readable under its own
/// spelling but displays as `STRASSE`, which folds to a different key.
pub(crate) fn is_listable_key(key: &str) -> bool {
    storage_key(&display_title(key)) == key
}
