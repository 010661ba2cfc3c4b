//! Name value object.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::errors::NameError;

/// Payload field carrying the submitted name.
pub const NAME_FIELD: &str = "name";

/// A submitted name.
///
/// Always non-empty. No trimming, length or content checks are applied, so
/// `"  "` is a valid name and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a name from a string.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Missing` if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, NameError> {
        let value = value.into();
        if value.is_empty() {
            return Err(NameError::Missing);
        }
        Ok(Self(value))
    }

    /// Extract the name from a request payload.
    ///
    /// The payload must be a JSON object whose `name` field is a non-empty
    /// string. An absent field, `null`, `""`, numbers, booleans, arrays and
    /// objects are all treated as missing.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Missing` when no usable name is present.
    pub fn from_payload(payload: &Value) -> Result<Self, NameError> {
        match payload.get(NAME_FIELD) {
            Some(Value::String(s)) => Self::new(s.as_str()),
            _ => Err(NameError::Missing),
        }
    }

    /// Get the name string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
