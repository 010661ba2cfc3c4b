//! Domain Layer
//!
//! Value objects, entities and repository ports for the two name stores.
//!
//! - `names`: the in-memory name collection behind `/`
//! - `records`: persisted name records behind `/api/`

pub mod names;
pub mod records;
