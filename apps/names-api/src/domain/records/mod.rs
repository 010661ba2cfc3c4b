//! Name Record Bounded Context
//!
//! Persisted name records: the entity, its validation rules and the
//! repository port used by the `/api/` resource.

pub mod entity;
pub mod errors;
pub mod repository;
pub mod validation;

pub use entity::{NameRecord, NewNameRecord, RecordId};
pub use errors::RecordStoreError;
pub use repository::RecordRepository;
pub use validation::{MAX_NAME_LENGTH, RecordValidator, ValidationErrors};
