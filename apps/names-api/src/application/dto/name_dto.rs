//! Name collection DTOs

use serde::{Deserialize, Serialize};

use crate::domain::names::Name;

/// Snapshot of the name collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameListingDto {
    /// Number of stored names.
    pub count: usize,
    /// Stored names in insertion order.
    pub names: Vec<String>,
}

impl NameListingDto {
    /// Build a listing from a store snapshot.
    #[must_use]
    pub fn from_names(names: Vec<Name>) -> Self {
        let names: Vec<String> = names.into_iter().map(Name::into_inner).collect();
        Self {
            count: names.len(),
            names,
        }
    }
}
