use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use analysis::hash_string;
use thiserror::Error;

use crate::record::AnalyzedString;

/// Errors produced by store operations.
///
/// The display strings are the messages surfaced verbatim on the HTTP error
/// body, so they stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same content hash already exists.
    #[error("String already exists in the system")]
    DuplicateContent {
        /// Content hash of the rejected insertion.
        hash: String,
    },

    /// No record exists for the given hash or value.
    #[error("String does not exist in the system")]
    NotFound,
}

/// Hash-keyed in-memory store of [`AnalyzedString`] records.
///
/// The store owns its synchronization primitive; there is no ambient global
/// state. Mutations take the write lock for the full read-modify-write, so a
/// record is never observable mid-construction and duplicate-content races
/// resolve to exactly one winner. Scans clone a snapshot under the read lock.
#[derive(Debug, Default)]
pub struct TextStore {
    records: RwLock<HashMap<String, AnalyzedString>>,
}

impl TextStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its content hash.
    ///
    /// Fails with [`StoreError::DuplicateContent`] when a record with the
    /// same id is already present; the stored record is left untouched by the
    /// rejected attempt.
    pub fn insert(&self, record: AnalyzedString) -> Result<(), StoreError> {
        let mut records = self.write();
        match records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateContent { hash: record.id }),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Fetch the record stored under `hash`.
    pub fn get(&self, hash: &str) -> Result<AnalyzedString, StoreError> {
        self.read().get(hash).cloned().ok_or(StoreError::NotFound)
    }

    /// Fetch the record for `value`, re-deriving its content hash.
    pub fn get_by_value(&self, value: &str) -> Result<AnalyzedString, StoreError> {
        self.get(&hash_string(value))
    }

    /// Remove the record for `value`, re-deriving its content hash.
    ///
    /// Atomic with respect to concurrent inserts and deletes of the same key.
    pub fn delete_by_value(&self, value: &str) -> Result<(), StoreError> {
        let hash = hash_string(value);
        self.write().remove(&hash).map(|_| ()).ok_or(StoreError::NotFound)
    }

    /// Snapshot of all stored records. Enumeration order is unspecified.
    pub fn all(&self) -> Vec<AnalyzedString> {
        self.read().values().cloned().collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, AnalyzedString>> {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, AnalyzedString>> {
        self.records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
