//! Field validation for values that arrive untyped
//!
//! Typed setters on the notifiers cannot receive the wrong kind of value.
//! Values read from a configuration file can, so they pass through these
//! helpers before reaching a setter.

use serde_json::Value;

use crate::error::NotificationError;

/// Human readable kind of a JSON value, as used in validation errors
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_u64() => "integer",
        Value::Number(n) if n.is_i64() => "negative integer",
        Value::Number(_) => "float",
        Value::String(s) if s.is_empty() => "empty string",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accept any string, including an empty one
pub fn string(field: &str, value: &Value) -> Result<String, NotificationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(NotificationError::new(field, "string", kind_of(other))),
    }
}

/// Accept a string with at least one character
pub fn non_empty_string(field: &str, value: &Value) -> Result<String, NotificationError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        other => Err(NotificationError::new(
            field,
            "non-empty string",
            kind_of(other),
        )),
    }
}

/// Optional string: `null` and `""` both mean "not provided"
pub fn optional_string(field: &str, value: &Value) -> Result<Option<String>, NotificationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(NotificationError::new(field, "string", kind_of(other))),
    }
}

/// A repeat count that fits in `u32`
pub fn count(field: &str, value: &Value) -> Result<u32, NotificationError> {
    const EXPECTED: &str = "non-negative integer";
    match value.as_u64() {
        Some(n) => u32::try_from(n)
            .map_err(|_| NotificationError::new(field, EXPECTED, "integer out of range")),
        None => Err(NotificationError::new(field, EXPECTED, kind_of(value))),
    }
}

/// Boolean switch: `null` reads as `false`
pub fn flag(field: &str, value: &Value) -> Result<bool, NotificationError> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        other => Err(NotificationError::new(field, "boolean", kind_of(other))),
    }
}

/// Reject an empty typed string
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), NotificationError> {
    if value.is_empty() {
        return Err(NotificationError::new(
            field,
            "non-empty string",
            "empty string",
        ));
    }
    Ok(())
}
