//! Name Repository Trait
//!
//! Defines the storage abstraction for the name collection.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::NameStoreError;
use super::value_objects::Name;

/// Repository trait for the append-only name collection.
///
/// Implementations must preserve insertion order and must never remove or
/// edit an entry.
#[async_trait]
pub trait NameRepository: Send + Sync {
    /// Append a name to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written.
    async fn append(&self, name: Name) -> Result<(), NameStoreError>;

    /// Return every stored name in insertion order.
    ///
    /// The returned list is a consistent snapshot: no append is observed
    /// half-way.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read.
    async fn snapshot(&self) -> Result<Vec<Name>, NameStoreError>;
}
