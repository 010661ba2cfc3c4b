//! Error handling for the names API.
//!
//! Every failure a request can hit is an `ApiError` carrying an `ErrorCode`.
//! The code fixes the HTTP status and the response body shape:
//!
//! | Code | Status | Body |
//! |------|--------|------|
//! | `NAME_REQUIRED` | 400 | `{"status":"error","message":...}` |
//! | `VALIDATION_FAILED` | 400 | `{"<field>":["<message>",...]}` |
//! | `MALFORMED_REQUEST` | 400 | `{"detail":...}` |
//! | `NOT_FOUND` | 404 | `{"detail":...}` |
//! | `METHOD_NOT_ALLOWED` | 405 | `{"detail":...}` |
//! | `UNSUPPORTED_MEDIA_TYPE` | 415 | `{"detail":...}` |
//! | `STORAGE_FAILURE` | 500 | `{"detail":...}` |

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::use_cases::{CreateRecordError, SaveNameError};
use crate::domain::names::{NameError, NameStoreError};
use crate::domain::records::{RecordStoreError, ValidationErrors};
use crate::infrastructure::http::{DetailResponse, MessageResponse};

/// Client-facing message for storage failures. The cause is only logged.
pub const SERVER_ERROR_MESSAGE: &str = "A server error occurred.";

/// Error codes for the names API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `name` missing from a name submission.
    NameRequired,
    /// Record payload failed field validation.
    ValidationFailed,
    /// Request body could not be decoded.
    MalformedRequest,
    /// No route for the path.
    NotFound,
    /// Route exists but not for this method.
    MethodNotAllowed,
    /// Request body has an unsupported content type.
    UnsupportedMediaType,
    /// A store or database operation failed.
    StorageFailure,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NameRequired | Self::ValidationFailed | Self::MalformedRequest => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::NameRequired => "NAME_REQUIRED",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::MalformedRequest => "MALFORMED_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::StorageFailure => "STORAGE_FAILURE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A request-level error.
#[derive(Debug, Error)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    field_errors: Option<ValidationErrors>,
}

impl ApiError {
    /// Create a new API error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field-level errors, for `ValidationFailed`.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&ValidationErrors> {
        self.field_errors.as_ref()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// Convenience constructors for common errors.
impl ApiError {
    /// Name submission without a usable `name`.
    #[must_use]
    pub fn name_required() -> Self {
        Self::new(ErrorCode::NameRequired, NameError::Missing.to_string())
    }

    /// Record payload rejected by the validator.
    #[must_use]
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: "Record validation failed".to_string(),
            field_errors: Some(errors),
        }
    }

    /// Undecodable request body.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedRequest, message)
    }

    /// Unknown path.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ErrorCode::NotFound, "Not found.")
    }

    /// Method not served on a known path.
    #[must_use]
    pub fn method_not_allowed(method: &Method) -> Self {
        Self::new(
            ErrorCode::MethodNotAllowed,
            format!("Method \"{method}\" not allowed."),
        )
    }

    /// Body with a content type no parser handles.
    #[must_use]
    pub fn unsupported_media_type(content_type: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedMediaType,
            format!("Unsupported media type \"{content_type}\" in request."),
        )
    }

    /// Store failure. The cause is logged, clients see a generic message.
    #[must_use]
    pub fn storage(cause: &dyn std::error::Error) -> Self {
        tracing::error!(error = %cause, "Storage failure");
        Self::new(ErrorCode::StorageFailure, SERVER_ERROR_MESSAGE)
    }
}

impl From<NameStoreError> for ApiError {
    fn from(error: NameStoreError) -> Self {
        Self::storage(&error)
    }
}

impl From<RecordStoreError> for ApiError {
    fn from(error: RecordStoreError) -> Self {
        Self::storage(&error)
    }
}

impl From<SaveNameError> for ApiError {
    fn from(error: SaveNameError) -> Self {
        match error {
            SaveNameError::Rejected(NameError::Missing) => Self::name_required(),
            SaveNameError::Store(e) => e.into(),
        }
    }
}

impl From<CreateRecordError> for ApiError {
    fn from(error: CreateRecordError) -> Self {
        match error {
            CreateRecordError::Invalid(errors) => Self::validation(errors),
            CreateRecordError::Store(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();

        match (self.code, self.field_errors) {
            (ErrorCode::NameRequired, _) => {
                tracing::debug!("Name submission rejected");
                (status, Json(MessageResponse::error(self.message))).into_response()
            }
            (ErrorCode::ValidationFailed, Some(errors)) => {
                tracing::debug!(fields = errors.len(), "Record payload rejected");
                (status, Json(errors)).into_response()
            }
            _ => (
                status,
                Json(DetailResponse {
                    detail: self.message,
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ErrorCode::NameRequired, StatusCode::BAD_REQUEST)]
    #[test_case(ErrorCode::ValidationFailed, StatusCode::BAD_REQUEST)]
    #[test_case(ErrorCode::MalformedRequest, StatusCode::BAD_REQUEST)]
    #[test_case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
    #[test_case(ErrorCode::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED)]
    #[test_case(ErrorCode::UnsupportedMediaType, StatusCode::UNSUPPORTED_MEDIA_TYPE)]
    #[test_case(ErrorCode::StorageFailure, StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_mapping(code: ErrorCode, expected: StatusCode) {
        assert_eq!(code.status_code(), expected);
    }

    #[test]
    fn error_code_serializes_as_reason() {
        let json = serde_json::to_string(&ErrorCode::NameRequired).unwrap();
        assert_eq!(json, "\"NAME_REQUIRED\"");
    }

    #[test]
    fn display_includes_reason() {
        let err = ApiError::not_found();
        assert_eq!(err.to_string(), "[NOT_FOUND] Not found.");
    }

    #[test]
    fn name_required_message() {
        assert_eq!(
            ApiError::name_required().message(),
            crate::domain::names::errors::NAME_REQUIRED_MESSAGE
        );
    }

    #[test]
    fn method_not_allowed_names_method() {
        let err = ApiError::method_not_allowed(&Method::PUT);
        assert_eq!(err.message(), "Method \"PUT\" not allowed.");
    }

    #[test]
    fn store_errors_hide_cause() {
        let err: ApiError = RecordStoreError::Query("no such table".to_string()).into();
        assert_eq!(err.code(), ErrorCode::StorageFailure);
        assert_eq!(err.message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn create_record_errors_keep_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "This field is required.");

        let err: ApiError = CreateRecordError::Invalid(errors.clone()).into();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.field_errors(), Some(&errors));
    }
}
