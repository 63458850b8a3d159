use super::{is_listable_key, is_valid_key, EntryStore};
use crate::error::{Result, WakeyError};
use crate::model::{display_title, storage_key, Entry};
use std::collections::BTreeMap;
use std::io;
use std::sync::{Mutex, MutexGuard};

/// In-memory storage for testing and embedding.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| WakeyError::Store("in-memory store lock poisoned".to_string()))
    }
}

impl EntryStore for InMemoryStore {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .entries()?
            .keys()
            .filter(|k| is_listable_key(k))
            .map(|k| display_title(k))
            .collect())
    }

    fn read(&self, title: &str) -> Result<Entry> {
        self.entries()?
            .get(&storage_key(title))
            .map(|contents| Entry::new(title, contents.as_str()))
            .ok_or_else(|| WakeyError::NotFound {
                title: display_title(title),
            })
    }

    fn write(&self, title: &str, contents: &str) -> Result<Entry> {
        let key = storage_key(title);
        if !is_valid_key(&key) {
            return Err(WakeyError::WriteFailed {
                title: title.to_string(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "invalid entry title"),
            });
        }
        self.entries()?.insert(key, contents.to_string());
        Ok(Entry::new(title, contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_casing() {
        let store = InMemoryStore::new();
        let written = store.write("Foo", "x").unwrap();
        assert_eq!(written.title, "FOO");

        assert_eq!(store.read("foo").unwrap(), Entry::new("FOO", "x"));
        assert_eq!(store.read("FOO").unwrap().contents, "x");
    }

    #[test]
    fn test_overwrite_and_list() {
        let store = InMemoryStore::new();
        store.write("b", "1").unwrap();
        store.write("A", "1").unwrap();
        store.write("B", "2").unwrap();

        assert_eq!(store.list().unwrap(), vec!["A", "B"]);
        assert_eq!(store.read("b").unwrap().contents, "2");
    }

    #[test]
    fn test_every_listed_title_is_readable() {
        let store = InMemoryStore::new();
        for title in ["plain", "Café", "straße"] {
            store.write(title, title).unwrap();
        }

        let listed = store.list().unwrap();
        assert_eq!(listed, vec!["CAFÉ", "PLAIN"]);
        for title in listed {
            assert!(store.read(&title).is_ok(), "{} not readable", title);
        }
        assert_eq!(store.read("straße").unwrap().contents, "straße");
    }

    #[test]
    fn test_missing_entry() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.read("missing"),
            Err(WakeyError::NotFound { ref title }) if title == "MISSING"
        ));
    }

    #[test]
    fn test_invalid_title_rejected_like_file_store() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.write("a/b", "x"),
            Err(WakeyError::WriteFailed { .. })
        ));
        assert!(store.list().unwrap().is_empty());
    }
}
