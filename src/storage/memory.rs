// src/storage/memory.rs
use std::collections::BTreeMap;

use serde_json::Value;

use super::{check_quota, KeyValueStore, Result};

/// Volatile store with the same quota behaviour as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn with_quota(quota: Option<usize>) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);
        check_quota(&next, self.quota)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
