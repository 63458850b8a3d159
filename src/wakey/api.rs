//! # API Facade
//!
//! The API layer is a **thin facade** over the store and the markdown renderer. It is
//! the single entry point for wakey operations, whichever client is calling: the
//! HTTP handlers in [`crate::web`] and the CLI both go through it.
//!
//! ## What the API Does NOT Do
//!
//! - **Title casing**: the store canonicalizes titles, the API passes them through
//! - **I/O formatting**: no JSON, no HTML pages, no stdout
//!
//! ## Generic Over EntryStore
//!
//! `WakeyApi<S: EntryStore>` is generic over the storage backend:
//! - Production: `WakeyApi<FileStore>`
//! - Testing: `WakeyApi<InMemoryStore>`

use crate::error::Result;
use crate::markdown;
use crate::model::{Entry, EntryListing, RenderedEntry};
use crate::store::EntryStore;

pub struct WakeyApi<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> WakeyApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_entries(&self) -> Result<EntryListing> {
        let entries = self.store.list()?;
        Ok(EntryListing { entries })
    }

    pub fn get_entry(&self, title: &str) -> Result<Entry> {
        self.store.read(title)
    }

    pub fn write_entry(&self, title: &str, contents: &str) -> Result<Entry> {
        self.store.write(title, contents)
    }

    /// Read an entry and run its contents through the markdown renderer.
    pub fn render_entry(&self, title: &str) -> Result<RenderedEntry> {
        let entry = self.store.read(title)?;
        Ok(RenderedEntry {
            html: markdown::to_html(&entry.contents),
            title: entry.title,
        })
    }
}
