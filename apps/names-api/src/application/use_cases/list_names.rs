//! List Names Use Case

use std::sync::Arc;

use crate::application::dto::NameListingDto;
use crate::domain::names::{NameRepository, NameStoreError};

/// Use case for reading the whole name collection.
pub struct ListNamesUseCase<N>
where
    N: NameRepository,
{
    names: Arc<N>,
}

impl<N> ListNamesUseCase<N>
where
    N: NameRepository,
{
    /// Create a new `ListNamesUseCase`.
    pub const fn new(names: Arc<N>) -> Self {
        Self { names }
    }

    /// Return every stored name together with the count.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read.
    pub async fn execute(&self) -> Result<NameListingDto, NameStoreError> {
        let snapshot = self.names.snapshot().await?;
        Ok(NameListingDto::from_names(snapshot))
    }
}
