//! File-backed key-value store.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{KeyValueStore, Result, StorageError};

/// Key-value store persisted as a single JSON object on disk.
///
/// The whole document is kept in memory and rewritten on every change:
/// written to a temp file first, then renamed over the original, so a crash
/// mid-write leaves the previous version intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl FileStore {
    /// Open a store file, creating its parent directory if needed.
    ///
    /// A missing file is an empty store; it is created on the first write.
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the directory or file cannot be read, and
    /// `StorageError::CorruptedData` if the file is not a JSON object.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(StorageError::CorruptedData(format!(
                        "{} does not hold a JSON object",
                        path.display()
                    )));
                }
                Err(e) => {
                    return Err(StorageError::CorruptedData(format!(
                        "{}: {e}",
                        path.display()
                    )));
                }
            }
        } else {
            Map::new()
        };

        tracing::debug!("Opened store {} ({} keys)", path.display(), values.len());

        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(&self.values)
            .map_err(|e| StorageError::CorruptedData(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value);

        if let Err(e) = self.flush() {
            // Keep memory in step with what is actually on disk.
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }

        tracing::debug!("Saved '{key}' to {}", self.path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let Some(previous) = self.values.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.flush() {
            self.values.insert(key.to_string(), previous);
            return Err(e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("progress.json")).unwrap();
        assert_eq!(store.get("food").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("household", json!(["garden"])).unwrap();
            store.set("lives_count", json!(3)).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("household").unwrap(), Some(json!(["garden"])));
        assert_eq!(store.get("lives_count").unwrap(), Some(json!(3)));
    }

    #[test]
    fn remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("tutorial_seen", json!(true)).unwrap();
        store.remove("tutorial_seen").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("tutorial_seen").unwrap(), None);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("progress.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("food", json!([])).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("food", json!(["banana"])).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupted_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::CorruptedData(_))
        ));

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::CorruptedData(_))
        ));
    }
}
