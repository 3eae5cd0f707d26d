//! Durable single-file storage adapter

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use super::{SecretStore, StoreError};

/// Durable store persisting one JSON object to disk.
///
/// Writes land in a temp file in the target directory and are renamed over
/// the previous file, so a reader never observes a partial write. A corrupt
/// or missing file reads as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the given file path. The file is created on
    /// first write; the parent directory must already exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> HashMap<String, String> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "corrupt store file, treating as empty");
                HashMap::new()
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut temp, entries)?;
        temp.flush()?;
        temp.persist(&self.path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}

impl SecretStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load();
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.load().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("secrets.json"));
        (dir, store)
    }

    #[test]
    fn values_survive_reopen() {
        let (dir, store) = temp_store();
        store.set("refresh-token", "R1").unwrap();
        drop(store);

        let reopened = FileStore::new(dir.path().join("secrets.json"));
        assert_eq!(reopened.get("refresh-token").unwrap().as_deref(), Some("R1"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.contains("anything"));
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("secrets.json"), "{not json").unwrap();
        assert_eq!(store.get("auth-token").unwrap(), None);

        // A write replaces the corrupt file with a valid one
        store.set("auth-token", "T1").unwrap();
        assert_eq!(store.get("auth-token").unwrap().as_deref(), Some("T1"));
    }

    #[test]
    fn remove_missing_key_is_a_noop() {
        let (_dir, store) = temp_store();
        store.remove("missing").unwrap();
        store.set("a", "1").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }
}
