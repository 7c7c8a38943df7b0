// Loosely typed request fields
//
// Clients may send `null`, `false`, `0` or `""` for a field they mean to
// leave out. Those all count as absent; any other value of the wrong type is
// a malformed body.

use serde_json::Value;

use crate::errors::ApiError;

/// True for the values a client uses to mean "not provided"
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// A required non-empty string field
pub fn required_text(
    field: &'static str,
    value: Option<Value>,
    missing: &'static str,
) -> Result<String, ApiError> {
    match value {
        None => Err(ApiError::MissingInput(missing)),
        Some(value) if is_blank(&value) => Err(ApiError::MissingInput(missing)),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(ApiError::InvalidBody(format!(
            "field `{}` must be a string",
            field
        ))),
    }
}

/// An optional positive integer id. Blank values read as `None`.
pub fn optional_id(field: &'static str, value: Option<Value>) -> Result<Option<u64>, ApiError> {
    match value {
        None => Ok(None),
        Some(value) if is_blank(&value) => Ok(None),
        Some(Value::Number(number)) => number.as_u64().map(Some).ok_or_else(|| {
            ApiError::InvalidBody(format!("field `{}` must be a positive integer", field))
        }),
        Some(_) => Err(ApiError::InvalidBody(format!(
            "field `{}` must be a positive integer",
            field
        ))),
    }
}
