//! Untrusted, loosely-typed assessment records.
//!
//! A model is asked for an [`AssessmentRecord`](crate::models::assessment::AssessmentRecord)
//! but may return any JSON at all. Until it has been normalized the response
//! is kept as a plain string-keyed map of JSON values.

use serde_json::{Map, Value};

use crate::error::CoreError;

pub type PartialRecord = Map<String, Value>;

/// Parse model output text into a [`PartialRecord`].
///
/// Fails when the text is not JSON or its top level is not an object.
pub fn parse_partial(text: &str) -> Result<PartialRecord, CoreError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::NotAnObject(json_kind(&other))),
    }
}

/// Name of a JSON value's type, for error messages and logs.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
