// src/storage/mod.rs
use std::collections::BTreeMap;
use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::config::Config;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

pub const SETTINGS_KEY: &str = "generatorSettings";
pub const HISTORY_KEY: &str = "passwordHistory";
pub const THEME_KEY: &str = "styleMode";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {required} bytes needed, {quota} allowed")]
    QuotaExceeded { required: usize, quota: usize },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable key/value store holding the settings, history and theme records.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;

    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

// Load a record, falling back to its default when missing or unreadable
pub fn load_record<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.get(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Ignoring unreadable '{}' record: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("Failed to read '{}' record: {}", key, e);
            T::default()
        }
    }
}

pub fn save_record<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, record: &T) -> Result<()> {
    let value = serde_json::to_value(record)?;
    store.set(key, value)
}

// Reject a document whose serialized size is over the quota
pub(crate) fn check_quota(entries: &BTreeMap<String, Value>, quota: Option<usize>) -> Result<()> {
    if let Some(quota) = quota {
        let required = serde_json::to_vec(entries)?.len();
        if required > quota {
            return Err(StorageError::QuotaExceeded { required, quota });
        }
    }
    Ok(())
}

/// Open the store configured for this run.
///
/// Uses the JSON document in the data directory, or an in-memory store when
/// no data directory can be determined.
pub fn open_store(config: &Config) -> Result<Box<dyn KeyValueStore>> {
    match config.storage_path() {
        Some(path) => {
            let store = JsonFileStore::open(path, config.storage_quota_bytes)?;
            log::info!("Using storage file {}", store.path().display());
            Ok(Box::new(store))
        }
        None => {
            log::warn!("No data directory available, settings and history will not be saved");
            Ok(Box::new(MemoryStore::with_quota(config.storage_quota_bytes)))
        }
    }
}
