//! Create Record Use Case

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::application::dto::NameRecordDto;
use crate::domain::records::{RecordRepository, RecordStoreError, RecordValidator, ValidationErrors};

/// Reasons a record could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateRecordError {
    /// The payload failed validation.
    #[error("Record validation failed")]
    Invalid(ValidationErrors),

    /// The repository failed.
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

/// Use case for validating and persisting a record.
pub struct CreateRecordUseCase<R>
where
    R: RecordRepository,
{
    records: Arc<R>,
    validator: RecordValidator,
}

impl<R> CreateRecordUseCase<R>
where
    R: RecordRepository,
{
    /// Create a new `CreateRecordUseCase` with the default validator.
    pub fn new(records: Arc<R>) -> Self {
        Self::with_validator(records, RecordValidator::new())
    }

    /// Create a new `CreateRecordUseCase` with a specific validator.
    pub const fn with_validator(records: Arc<R>, validator: RecordValidator) -> Self {
        Self { records, validator }
    }

    /// Validate the raw payload, persist it and return the shaped record.
    ///
    /// # Errors
    ///
    /// Returns `CreateRecordError::Invalid` with the field-level errors, or
    /// `CreateRecordError::Store` if the insert fails.
    pub async fn execute(&self, payload: &Value) -> Result<NameRecordDto, CreateRecordError> {
        let new_record = self
            .validator
            .validate(payload)
            .map_err(CreateRecordError::Invalid)?;

        let record = self.records.create(new_record).await?;
        tracing::info!(record_id = %record.id(), "Name record created");

        Ok(NameRecordDto::from_record(&record))
    }
}
