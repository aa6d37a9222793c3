//! Field projection over untyped LCD responses.
//!
//! The LCD payloads are passed through as `serde_json::Value`; callers pull
//! one field out by path. Absent fields and JSON `null` are both reported as
//! [`CoreError::MissingField`] with the dotted path.

use serde_json::Value;

use crate::error::CoreError;

/// Walk `path` through nested objects and return the value at the end.
pub fn project<'a>(raw: &'a Value, path: &[&str]) -> Result<&'a Value, CoreError> {
    let mut current = raw;
    for (depth, key) in path.iter().enumerate() {
        current = match current.get(*key) {
            Some(Value::Null) | None => {
                return Err(CoreError::MissingField {
                    field: path[..=depth].join("."),
                })
            }
            Some(next) => next,
        };
    }
    Ok(current)
}

pub fn project_bool(raw: &Value, path: &[&str]) -> Result<bool, CoreError> {
    project(raw, path)?
        .as_bool()
        .ok_or_else(|| CoreError::UnexpectedFieldType {
            field: path.join("."),
            expected: "boolean",
        })
}

pub fn project_str<'a>(raw: &'a Value, path: &[&str]) -> Result<&'a str, CoreError> {
    project(raw, path)?
        .as_str()
        .ok_or_else(|| CoreError::UnexpectedFieldType {
            field: path.join("."),
            expected: "string",
        })
}
