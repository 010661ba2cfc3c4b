//! Record Repository Trait
//!
//! Create-and-list persistence for name records.

use async_trait::async_trait;

use super::entity::{NameRecord, NewNameRecord};
use super::errors::RecordStoreError;

/// Repository trait for name record persistence.
///
/// Records are never updated or deleted; `list_all` returns them in the
/// order they were created.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist a validated record and return it with its assigned fields.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    async fn create(&self, record: NewNameRecord) -> Result<NameRecord, RecordStoreError>;

    /// Fetch all records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails or a row cannot be decoded.
    async fn list_all(&self) -> Result<Vec<NameRecord>, RecordStoreError>;
}
