//! Save Name Use Case

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::names::{Name, NameError, NameRepository, NameStoreError};

/// Reasons a name could not be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveNameError {
    /// The payload carried no usable name.
    #[error(transparent)]
    Rejected(#[from] NameError),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] NameStoreError),
}

/// Use case for appending a submitted name.
pub struct SaveNameUseCase<N>
where
    N: NameRepository,
{
    names: Arc<N>,
}

impl<N> SaveNameUseCase<N>
where
    N: NameRepository,
{
    /// Create a new `SaveNameUseCase`.
    pub const fn new(names: Arc<N>) -> Self {
        Self { names }
    }

    /// Extract the name from the payload and append it.
    ///
    /// Nothing is stored when the name is missing.
    ///
    /// # Errors
    ///
    /// Returns `SaveNameError::Rejected` for a missing name and
    /// `SaveNameError::Store` if the append fails.
    pub async fn execute(&self, payload: &Value) -> Result<Name, SaveNameError> {
        let name = Name::from_payload(payload)?;
        self.names.append(name.clone()).await?;
        tracing::debug!(name = %name, "Name appended");
        Ok(name)
    }
}
