//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

use crate::application::dto::NameListingDto;

/// Confirmation message for a stored name.
pub const NAME_SAVED_MESSAGE: &str = "Name saved successfully";

/// Status marker carried by name envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Request succeeded.
    Success,
    /// Request was rejected.
    Error,
}

/// Envelope listing the name collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameListResponse {
    /// Always `success`.
    pub status: ResponseStatus,
    /// Number of stored names.
    pub count_name: usize,
    /// Stored names in insertion order.
    pub name: Vec<String>,
}

impl NameListResponse {
    /// Wrap a listing in a success envelope.
    #[must_use]
    pub fn success(listing: NameListingDto) -> Self {
        Self {
            status: ResponseStatus::Success,
            count_name: listing.count,
            name: listing.names,
        }
    }
}

/// Envelope carrying a status and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome.
    pub status: ResponseStatus,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Success envelope.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    /// Error envelope.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}

/// Plain error body for protocol-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    /// Error description.
    pub detail: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
