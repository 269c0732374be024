//! Key/value preference storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

/// Persistent preferences (skin tone, usage counts).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// In-process store. Nothing survives the picker.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file starts empty.
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read state from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse state from {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write state to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.write()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("skin").is_none());
        store.set("skin", json!(3)).unwrap();
        assert_eq!(store.get("skin"), Some(json!(3)));
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("state.json")).unwrap();
        assert!(store.get("skin").is_none());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("skin", json!(4)).unwrap();
        store.set("last", json!("joy")).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("skin"), Some(json!(4)));
        assert_eq!(reopened.get("last"), Some(json!("joy")));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert!(FileStore::open(&path).is_err());
    }
}
