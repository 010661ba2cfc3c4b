//! In-memory stores.
//!
//! `InMemoryNameStore` backs the `/` resource for the life of the process.
//! `InMemoryRecordRepository` stands in for the database when the
//! `memory` backend is configured, and in tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::names::{Name, NameRepository, NameStoreError};
use crate::domain::records::{
    NameRecord, NewNameRecord, RecordId, RecordRepository, RecordStoreError,
};

/// Process-owned, lock-guarded name collection.
///
/// Appends take the write lock, so concurrent submissions are serialized
/// and none is lost.
#[derive(Debug, Default)]
pub struct InMemoryNameStore {
    names: RwLock<Vec<Name>>,
}

impl InMemoryNameStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of stored names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }

    /// Add a name directly (for test setup).
    pub fn add(&self, name: Name) {
        self.names.write().push(name);
    }
}

#[async_trait]
impl NameRepository for InMemoryNameStore {
    async fn append(&self, name: Name) -> Result<(), NameStoreError> {
        self.names.write().push(name);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<Name>, NameStoreError> {
        Ok(self.names.read().clone())
    }
}

/// In-memory implementation of `RecordRepository`.
///
/// Records are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<Vec<NameRecord>>,
}

impl InMemoryRecordRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn create(&self, record: NewNameRecord) -> Result<NameRecord, RecordStoreError> {
        let record = record.into_record(RecordId::generate(), Utc::now());
        self.records.write().push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<NameRecord>, RecordStoreError> {
        Ok(self.records.read().clone())
    }
}
