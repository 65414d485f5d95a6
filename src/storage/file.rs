// src/storage/file.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{check_quota, KeyValueStore, Result};

/// Key/value records kept in a single JSON document on disk.
///
/// The document is rewritten on every mutation through a temporary file and
/// a rename, so a crash mid-write leaves the previous document in place.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
    quota: Option<usize>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>, quota: Option<usize>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = if path.exists() {
            let content = fs::read(&path)?;
            match serde_json::from_slice(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Storage file {} is unreadable, starting empty: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries, quota })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_vec(entries)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);
        check_quota(&next, self.quota)?;
        self.write_document(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.write_document(&next)?;
        self.entries = next;
        Ok(())
    }
}
