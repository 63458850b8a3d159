use super::{is_listable_key, is_valid_key, EntryStore};
use crate::error::{Result, WakeyError};
use crate::model::{display_title, storage_key, Entry};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_EXT: &str = ".md";

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Create the root directory (and parents) if it is missing.
    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WakeyError::Io)?;
            log::info!("Created entry directory {}", self.root.display());
        }
        Ok(())
    }

    /// The file an entry with this title lives in, or `None` if the title can't name one.
    pub fn entry_path(&self, title: &str) -> Option<PathBuf> {
        let key = storage_key(title);
        if !is_valid_key(&key) {
            return None;
        }
        Some(self.root.join(format!("{}{}", key, self.file_ext)))
    }

    /// The title stem of a directory entry, if it is one of ours and reachable by `read`.
    fn listed_stem(&self, file_name: &str) -> Option<String> {
        let stem = file_name.strip_suffix(self.file_ext.as_str())?;
        // Reads fold the display title back to a key, so the stem must survive that.
        if stem.is_empty() || !is_listable_key(stem) {
            return None;
        }
        Some(stem.to_string())
    }
}

impl EntryStore for FileStore {
    fn list(&self) -> Result<Vec<String>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(WakeyError::Io(e)),
        };

        let mut titles = Vec::new();
        for item in dir {
            let item = item.map_err(WakeyError::Io)?;
            if !item.file_type().map_err(WakeyError::Io)?.is_file() {
                continue;
            }
            let file_name = item.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(stem) = self.listed_stem(file_name) {
                titles.push(display_title(&stem));
            }
        }
        titles.sort();

        log::debug!("Listed {} entries in {}", titles.len(), self.root.display());
        Ok(titles)
    }

    fn read(&self, title: &str) -> Result<Entry> {
        let path = match self.entry_path(title) {
            Some(path) if path.is_file() => path,
            _ => {
                return Err(WakeyError::NotFound {
                    title: display_title(title),
                })
            }
        };

        let contents = fs::read_to_string(&path).map_err(WakeyError::Io)?;
        log::debug!("Read {} ({} bytes)", path.display(), contents.len());
        Ok(Entry::new(title, contents))
    }

    fn write(&self, title: &str, contents: &str) -> Result<Entry> {
        let path = self.entry_path(title).ok_or_else(|| WakeyError::WriteFailed {
            title: title.to_string(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "title cannot name a file in the entry directory",
            ),
        })?;

        fs::write(&path, contents).map_err(|source| WakeyError::WriteFailed {
            title: title.to_string(),
            source,
        })?;

        log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(Entry::new(title, contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_dir, store) = setup();
        let contents = "# Soup\n\nBoil water.\r\nNo trailing newline";

        let written = store.write("Recipe", contents).unwrap();
        assert_eq!(written, Entry::new("RECIPE", contents));

        let read = store.read("Recipe").unwrap();
        assert_eq!(read.title, "RECIPE");
        assert_eq!(read.contents, contents);
    }

    #[test]
    fn test_write_stores_lowercase_file_with_raw_contents() {
        let (dir, store) = setup();
        store.write("Foo", "x").unwrap();

        let on_disk = fs::read_to_string(dir.path().join("foo.md")).unwrap();
        assert_eq!(on_disk, "x");
        assert!(!dir.path().join("Foo.md").exists());
    }

    #[test]
    fn test_read_is_case_insensitive() {
        let (_dir, store) = setup();
        store.write("Foo", "x").unwrap();

        assert_eq!(store.read("FOO").unwrap().contents, "x");
        assert_eq!(store.read("foo").unwrap().contents, "x");
        assert_eq!(store.read("fOo").unwrap().title, "FOO");
    }

    #[test]
    fn test_write_twice_is_idempotent() {
        let (dir, store) = setup();
        store.write("note", "same").unwrap();
        store.write("note", "same").unwrap();

        assert_eq!(store.list().unwrap(), vec!["NOTE"]);
        assert_eq!(store.read("note").unwrap().contents, "same");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let (_dir, store) = setup();
        store.write("note", "first, and rather long").unwrap();
        store.write("NOTE", "second").unwrap();

        assert_eq!(store.read("note").unwrap().contents, "second");
    }

    #[test]
    fn test_list_returns_every_written_title() {
        let (_dir, store) = setup();
        store.write("c", "3").unwrap();
        store.write("A", "1").unwrap();
        store.write("b", "2").unwrap();

        assert_eq!(store.list().unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, store) = setup();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("does-not-exist"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_skips_foreign_and_unreachable_files() {
        let (dir, store) = setup();
        store.write("kept", "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "wrong extension").unwrap();
        fs::write(dir.path().join("Shouty.md"), "not reachable by read").unwrap();
        fs::write(dir.path().join(".md"), "empty stem").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["KEPT"]);
    }

    #[test]
    fn test_every_listed_title_is_readable() {
        let (_dir, store) = setup();
        for title in ["One", "two", "THREE", "Café", "straße"] {
            store.write(title, title).unwrap();
        }

        for title in store.list().unwrap() {
            assert!(store.read(&title).is_ok(), "{} not readable", title);
        }
        assert!(!store.list().unwrap().contains(&"STRASSE".to_string()));
    }

    #[test]
    fn test_unlisted_title_still_readable_by_its_own_spelling() {
        let (dir, store) = setup();
        store.write("straße", "x").unwrap();

        assert!(dir.path().join("straße.md").is_file());
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.read("Straße").unwrap().contents, "x");
        assert!(matches!(
            store.read("STRASSE"),
            Err(WakeyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_read_missing_reports_display_title() {
        let (_dir, store) = setup();
        match store.read("missing") {
            Err(WakeyError::NotFound { title }) => assert_eq!(title, "MISSING"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_title_is_not_found() {
        let (_dir, store) = setup();
        assert!(matches!(
            store.read("../secret"),
            Err(WakeyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_write_into_missing_root_fails_with_original_title() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("missing"));

        match store.write("MixedCase", "x") {
            Err(WakeyError::WriteFailed { title, .. }) => assert_eq!(title, "MixedCase"),
            other => panic!("expected WriteFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_write_invalid_title_fails() {
        let (dir, store) = setup();
        let result = store.write("../escape", "x");

        assert!(matches!(result, Err(WakeyError::WriteFailed { ref title, .. }) if title == "../escape"));
        assert!(!dir.path().parent().unwrap().join("escape.md").exists());
    }

    #[test]
    fn test_custom_file_ext() {
        let (dir, store) = setup();
        let store = store.with_file_ext("markdown");
        assert_eq!(store.file_ext(), ".markdown");

        store.write("doc", "x").unwrap();
        assert!(dir.path().join("doc.markdown").exists());
        assert_eq!(store.list().unwrap(), vec!["DOC"]);
    }

    #[test]
    fn test_ensure_root_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let store = FileStore::new(&root);

        store.ensure_root().unwrap();
        assert!(root.is_dir());
        store.write("ok", "x").unwrap();
    }

    #[test]
    fn test_entry_path() {
        let (dir, store) = setup();
        assert_eq!(store.entry_path("Foo"), Some(dir.path().join("foo.md")));
        assert_eq!(store.entry_path("a/b"), None);
    }
}
