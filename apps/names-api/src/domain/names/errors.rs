//! Name collection errors.

use thiserror::Error;

/// Message returned to clients when a name is missing.
pub const NAME_REQUIRED_MESSAGE: &str = "Name field is required";

/// Errors raised while accepting a submitted name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The `name` field is absent, empty or not a string.
    #[error("Name field is required")]
    Missing,
}

/// Errors raised by a name store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameStoreError {
    /// The store could not be read or written.
    #[error("Name store unavailable: {0}")]
    Unavailable(String),
}
