//! Persistence Adapters
//!
//! Implementations of the name and record repository traits.

pub mod in_memory;
pub mod turso_store;

pub use in_memory::{InMemoryNameStore, InMemoryRecordRepository};
pub use turso_store::TursoRecordRepository;
