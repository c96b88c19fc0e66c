//! File-based slot storage implementation
//!
//! Stores each slot as `<key>.json` in a directory on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::repository::SlotStorage;
use crate::{Error, Result};

/// Directory-backed slot storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per slot
    dir: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::InvalidInput(format!(
                "Invalid slot key '{}': use letters, digits, '-' or '_'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;

        // Write beside the slot and rename over it so readers never see a
        // half-written file.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .map_err(|e| Error::Storage(format!("Failed to write slot '{}': {}", key, e)))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::Storage(format!(
                "Failed to replace slot '{}': {}",
                key, e
            )));
        }

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("data"));
        (storage, temp_dir)
    }

    #[test]
    fn test_read_missing_slot() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.read("tasks").unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let (mut storage, _temp) = create_test_storage();

        storage.write("tasks", "[]").unwrap();
        assert_eq!(storage.read("tasks").unwrap(), Some("[]".to_string()));
        assert!(storage.dir().join("tasks.json").exists());
        assert!(!storage.dir().join("tasks.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_whole_slot() {
        let (mut storage, _temp) = create_test_storage();

        storage.write("notes", "[1,2,3,4,5,6,7,8]").unwrap();
        storage.write("notes", "[1]").unwrap();
        assert_eq!(storage.read("notes").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn test_slots_are_independent() {
        let (mut storage, _temp) = create_test_storage();

        storage.write("notes", "\"n\"").unwrap();
        storage.write("tasks", "\"t\"").unwrap();
        assert_eq!(storage.read("notes").unwrap(), Some("\"n\"".to_string()));
        assert_eq!(storage.read("tasks").unwrap(), Some("\"t\"".to_string()));
    }

    #[test]
    fn test_remove() {
        let (mut storage, _temp) = create_test_storage();

        storage.write("tasks", "[]").unwrap();
        storage.remove("tasks").unwrap();
        assert!(storage.read("tasks").unwrap().is_none());

        // Removing again is fine
        storage.remove("tasks").unwrap();
    }

    #[test]
    fn test_invalid_key_rejected() {
        let (mut storage, _temp) = create_test_storage();

        for key in ["", "../escape", "a/b", "with space"] {
            match storage.write(key, "[]") {
                Err(Error::InvalidInput(_)) => {}
                other => panic!("Expected InvalidInput for {:?}, got: {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_failed_write_keeps_previous_blob() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("data");
        let mut storage = FileStorage::new(&dir);
        storage.write("tasks", "[\"old\"]").unwrap();

        // A directory squatting on the temp path makes the write fail
        fs::create_dir(dir.join("tasks.json.tmp")).unwrap();
        let result = storage.write("tasks", "[\"new\"]");

        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(storage.read("tasks").unwrap(), Some("[\"old\"]".to_string()));
    }
}
