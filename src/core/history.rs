// src/core/history.rs
use crate::models::HistoryEntry;
use crate::storage::{save_record, KeyValueStore, StorageError, HISTORY_KEY};

pub const HISTORY_LIMIT: usize = 10;
// Size kept when the store refuses the full history
pub const HISTORY_FALLBACK_LIMIT: usize = 5;

/// Recently generated passwords, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    pub fn record(&mut self, password: &str, timestamp: String) {
        self.entries.insert(
            0,
            HistoryEntry {
                password: password.to_string(),
                timestamp,
            },
        );
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write the history to the store.
    ///
    /// If the write fails the history is cut to the fallback size and the
    /// write is retried once.
    pub fn persist(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        match save_record(store, HISTORY_KEY, &self.entries) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!(
                    "Failed to save password history ({}), retrying with the last {} entries",
                    e, HISTORY_FALLBACK_LIMIT
                );
                self.entries.truncate(HISTORY_FALLBACK_LIMIT);
                save_record(store, HISTORY_KEY, &self.entries)
            }
        }
    }
}
