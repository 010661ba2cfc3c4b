//! List Records Use Case

use std::sync::Arc;

use crate::application::dto::NameRecordDto;
use crate::domain::records::{RecordRepository, RecordStoreError};

/// Use case for listing every persisted record.
pub struct ListRecordsUseCase<R>
where
    R: RecordRepository,
{
    records: Arc<R>,
}

impl<R> ListRecordsUseCase<R>
where
    R: RecordRepository,
{
    /// Create a new `ListRecordsUseCase`.
    pub const fn new(records: Arc<R>) -> Self {
        Self { records }
    }

    /// Fetch and shape all records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn execute(&self) -> Result<Vec<NameRecordDto>, RecordStoreError> {
        let records = self.records.list_all().await?;
        Ok(records.iter().map(NameRecordDto::from_record).collect())
    }
}
