//! Request payload field validation.
//!
//! Operations receive their payload as a raw JSON object. `FieldData` checks
//! it against the operation's schema (the set of field names it understands)
//! and extracts typed values, so a typo such as `imput` is rejected instead
//! of silently ignored.

use saltyhash_types::error::HashError;
use serde_json::{Map, Value};

/// A raw payload paired with the field names its operation accepts.
pub struct FieldData<'a> {
    raw: &'a Map<String, Value>,
    schema: &'static [&'static str],
}

impl<'a> FieldData<'a> {
    pub fn new(raw: &'a Map<String, Value>, schema: &'static [&'static str]) -> Self {
        Self { raw, schema }
    }

    /// Reject any field not in the schema.
    pub fn validate(&self) -> Result<(), HashError> {
        match self.raw.keys().find(|key| !self.schema.contains(&key.as_str())) {
            Some(unknown) => Err(HashError::InvalidRequest(format!(
                "request contains invalid field: {unknown}"
            ))),
            None => Ok(()),
        }
    }

    /// A string field. `None` when absent or null.
    pub fn get_str(&self, field: &str) -> Result<Option<&'a str>, HashError> {
        match self.raw.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(type_error(field, "a string", other)),
        }
    }

    /// A list-of-strings field. `None` when absent or null.
    ///
    /// A single string is accepted as a comma-separated list.
    pub fn get_str_list(&self, field: &str) -> Result<Option<Vec<&'a str>>, HashError> {
        match self.raw.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(Some(Vec::new())),
            Some(Value::String(s)) => Ok(Some(s.split(',').map(str::trim).collect())),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.as_str()),
                    other => Err(type_error(field, "a list of strings", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(type_error(field, "a list of strings", other)),
        }
    }
}

fn type_error(field: &str, expected: &str, got: &Value) -> HashError {
    let kind = match got {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    };
    HashError::InvalidRequest(format!("field '{field}' must be {expected}, got {kind}"))
}
