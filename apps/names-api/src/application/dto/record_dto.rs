//! Name record DTOs

use serde::{Deserialize, Serialize};

use crate::domain::records::NameRecord;

/// Shaped name record as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecordDto {
    /// Record ID.
    pub id: String,
    /// Stored name.
    pub name: String,
    /// Creation time (RFC 3339, UTC).
    pub created_at: String,
}

impl NameRecordDto {
    /// Create from a domain record.
    #[must_use]
    pub fn from_record(record: &NameRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::RecordId;
    use chrono::{TimeZone, Utc};

    #[test]
    fn shapes_record_fields() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 4, 12, 0, 0).unwrap();
        let record = NameRecord::restore(RecordId::new("rec-1"), "Alice".to_string(), created_at);

        let dto = NameRecordDto::from_record(&record);

        assert_eq!(dto.id, "rec-1");
        assert_eq!(dto.name, "Alice");
        assert_eq!(dto.created_at, "2026-01-04T12:00:00+00:00");
    }
}
