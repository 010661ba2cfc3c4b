//! Name Collection Bounded Context
//!
//! An insertion-ordered, append-only list of submitted names.

pub mod errors;
pub mod repository;
pub mod value_objects;

pub use errors::{NameError, NameStoreError};
pub use repository::NameRepository;
pub use value_objects::Name;
