//! Record validation.
//!
//! Turns a raw request payload into a `NewNameRecord` or a field-level
//! error map shaped as `{"<field>": ["<message>", ...]}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::NewNameRecord;

/// Maximum length of a stored name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Key used for errors not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

const NAME_FIELD: &str = "name";

/// Field-level validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Create an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Whether no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }
}

/// Validates and shapes incoming record payloads.
///
/// Rules for `name`:
/// - required and not `null`
/// - strings and numbers are accepted, numbers as their decimal text
/// - surrounding whitespace is trimmed; the result may not be blank
/// - at most `MAX_NAME_LENGTH` characters
///
/// Unknown fields, and the server-assigned `id` / `created_at`, are ignored.
#[derive(Debug, Clone, Copy)]
pub struct RecordValidator {
    max_name_length: usize,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

impl RecordValidator {
    /// Create a validator with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a payload.
    ///
    /// # Errors
    ///
    /// Returns the field-level error map when the payload is not an object
    /// or `name` breaks a rule.
    pub fn validate(&self, payload: &Value) -> Result<NewNameRecord, ValidationErrors> {
        let Value::Object(fields) = payload else {
            return Err(ValidationErrors::single(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    type_name(payload)
                ),
            ));
        };

        let name = match fields.get(NAME_FIELD) {
            None => return Err(ValidationErrors::single(NAME_FIELD, "This field is required.")),
            Some(Value::Null) => {
                return Err(ValidationErrors::single(
                    NAME_FIELD,
                    "This field may not be null.",
                ));
            }
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => return Err(ValidationErrors::single(NAME_FIELD, "Not a valid string.")),
        };

        if name.is_empty() {
            return Err(ValidationErrors::single(
                NAME_FIELD,
                "This field may not be blank.",
            ));
        }

        if name.chars().count() > self.max_name_length {
            return Err(ValidationErrors::single(
                NAME_FIELD,
                format!(
                    "Ensure this field has no more than {} characters.",
                    self.max_name_length
                ),
            ));
        }

        Ok(NewNameRecord::new(name))
    }
}

/// Client-facing type name for a non-object payload.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn name_error(payload: &Value) -> String {
        let errors = RecordValidator::new().validate(payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        errors.get(NAME_FIELD).unwrap()[0].clone()
    }

    #[test]
    fn accepts_plain_name() {
        let record = RecordValidator::new()
            .validate(&json!({"name": "Alice"}))
            .unwrap();
        assert_eq!(record.name(), "Alice");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let record = RecordValidator::new()
            .validate(&json!({"name": "  Alice \n"}))
            .unwrap();
        assert_eq!(record.name(), "Alice");
    }

    #[test]
    fn numbers_become_text() {
        let record = RecordValidator::new()
            .validate(&json!({"name": 42}))
            .unwrap();
        assert_eq!(record.name(), "42");
    }

    #[test]
    fn ignores_read_only_and_unknown_fields() {
        let record = RecordValidator::new()
            .validate(&json!({"name": "Bob", "id": "x", "created_at": "y", "extra": 1}))
            .unwrap();
        assert_eq!(record.name(), "Bob");
    }

    #[test]
    fn accepts_exactly_max_length() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        let record = RecordValidator::new()
            .validate(&json!({ "name": name }))
            .unwrap();
        assert_eq!(record.name().len(), MAX_NAME_LENGTH);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(RecordValidator::new().validate(&json!({ "name": name })).is_ok());
    }

    #[test_case(json!({}), "This field is required." ; "missing")]
    #[test_case(json!({"name": null}), "This field may not be null." ; "null")]
    #[test_case(json!({"name": ""}), "This field may not be blank." ; "empty")]
    #[test_case(json!({"name": "   "}), "This field may not be blank." ; "whitespace only")]
    #[test_case(json!({"name": true}), "Not a valid string." ; "boolean")]
    #[test_case(json!({"name": ["a"]}), "Not a valid string." ; "array")]
    #[test_case(json!({"name": {"a": 1}}), "Not a valid string." ; "object")]
    fn rejects_bad_name(payload: Value, expected: &str) {
        assert_eq!(name_error(&payload), expected);
    }

    #[test]
    fn rejects_too_long() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            name_error(&json!({ "name": name })),
            "Ensure this field has no more than 100 characters."
        );
    }

    #[test_case(json!(["Alice"]), "list" ; "array")]
    #[test_case(json!("Alice"), "str" ; "string")]
    #[test_case(json!(7), "int" ; "integer")]
    #[test_case(json!(1.5), "float" ; "float")]
    #[test_case(json!(false), "bool" ; "boolean")]
    #[test_case(Value::Null, "NoneType" ; "null")]
    fn rejects_non_object_payload(payload: Value, type_label: &str) {
        let errors = RecordValidator::new().validate(&payload).unwrap_err();
        assert_eq!(
            errors.get(NON_FIELD_ERRORS).unwrap().to_vec(),
            vec![format!(
                "Invalid data. Expected a dictionary, but got {type_label}."
            )]
        );
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let errors = RecordValidator::new().validate(&json!({})).unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({"name": ["This field is required."]})
        );
    }
}
