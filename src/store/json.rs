//! JSON file-backed key-value store

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// Key-value store persisted to a single JSON file
///
/// Values are kept in memory and the whole map is rewritten on every set.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl JsonStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| StoreError::Io { path: path.clone(), source })?;
            serde_json::from_str(&contents)?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values: RefCell::new(values) })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current values to disk
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }

        let contents = serde_json::to_string_pretty(&*self.values.borrow())?;

        std::fs::write(&self.path, contents)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;

        Ok(())
    }
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.borrow_mut().insert(key.to_string(), value);
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{USERNAME_KEY, XP_KEY};

    #[test]
    fn open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get_int(XP_KEY, 420), 420);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonStore::open(&path).unwrap();
        store.set_int(XP_KEY, 460);
        store.set_string(USERNAME_KEY, "Grace");
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.get_int(XP_KEY, 0), 460);
        assert_eq!(reopened.get_string(USERNAME_KEY, "Student"), "Grace");
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(JsonStore::open(&path), Err(StoreError::Parse(_))));
    }

    #[test]
    fn failed_write_keeps_value_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail
        let path = dir.path().join("store.json");
        std::fs::create_dir(&path).unwrap();

        let store = JsonStore { path, values: RefCell::new(BTreeMap::new()) };
        store.set_int(XP_KEY, 500);
        assert_eq!(store.get_int(XP_KEY, 0), 500);
        assert!(store.save().is_err());
    }
}
