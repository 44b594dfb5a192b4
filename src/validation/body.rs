//! Typed field extraction from JSON bodies
//!
//! Body validation differs from parameter validation in one way: the whole
//! body is walked and every offending field is reported in a single
//! rejection, rather than stopping at the first violation. Each helper
//! appends to a shared error list and returns `None` on failure so the
//! caller can keep walking.
//!
//! Field paths are dotted from the body root (`image.url`, `post.title`),
//! built from the `prefix` each caller threads through.

use serde_json::Value;

use super::FieldError;

/// Dotted path for `key` under `prefix` (empty prefix means body root).
pub fn field_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Fail unless `value` is a JSON object, reporting it under `prefix` (or
/// `body` for the root). Returns the object for field lookups.
pub fn require_object<'a>(
    value: &'a Value,
    prefix: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a serde_json::Map<String, Value>> {
    match value.as_object() {
        Some(object) => Some(object),
        None => {
            let path = if prefix.is_empty() { "body" } else { prefix };
            errors.push(FieldError::invalid_type(path, "JSON object"));
            None
        }
    }
}

/// Extract a required string field.
pub fn require_str(
    object: &serde_json::Map<String, Value>,
    key: &str,
    prefix: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let path = field_path(prefix, key);
    match object.get(key) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(path));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(FieldError::invalid_type(path, "string"));
            None
        }
    }
}

/// Extract a required integer field.
///
/// JSON numbers must be integral; strings holding a base-10 integer are
/// coerced, so clients sending `"id": "10"` are accepted.
pub fn require_i64(
    object: &serde_json::Map<String, Value>,
    key: &str,
    prefix: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    let path = field_path(prefix, key);
    match object.get(key) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(path));
            None
        }
        Some(Value::Number(number)) => match number.as_i64() {
            Some(value) => Some(value),
            None => {
                errors.push(FieldError::invalid_type(path, "integer"));
                None
            }
        },
        Some(Value::String(raw)) => match raw.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.push(FieldError::invalid_type(path, "integer"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::invalid_type(path, "integer"));
            None
        }
    }
}
