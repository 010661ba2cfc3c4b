//! Name record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier (UUID v4).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a new unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated record that has not been stored yet.
///
/// Only `RecordValidator` builds these, so `name` is already trimmed and
/// within length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNameRecord {
    name: String,
}

impl NewNameRecord {
    pub(crate) const fn new(name: String) -> Self {
        Self { name }
    }

    /// The validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign an identifier and creation time.
    #[must_use]
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> NameRecord {
        NameRecord {
            id,
            name: self.name,
            created_at,
        }
    }
}

/// A stored name record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    id: RecordId,
    name: String,
    created_at: DateTime<Utc>,
}

impl NameRecord {
    /// Rebuild a record read back from storage.
    #[must_use]
    pub const fn restore(id: RecordId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    /// Record identifier.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Stored name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn into_record_keeps_name() {
        let now = Utc::now();
        let id = RecordId::new("rec-1");
        let record = NewNameRecord::new("Alice".to_string()).into_record(id.clone(), now);

        assert_eq!(record.id(), &id);
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.created_at(), now);
    }
}
