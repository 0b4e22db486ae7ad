//! Coercion of loose attribute literals into canonical types.
//!
//! Structured types (`BoundingBox`, `DataType`, the numeric wrappers,
//! `FieldMetadata`) go through their `Deserialize` impls; text attributes
//! accept strings and numbers. Every failure names the attribute.

use crate::error::{describe, SchemaError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Coerce a literal into canonical type `T`.
pub fn coerce<T: DeserializeOwned>(attribute: &str, value: &Value) -> Result<T, SchemaError> {
    T::deserialize(value).map_err(|e| SchemaError::invalid(attribute, e))
}

/// Coerce a literal, treating `null` as "use the default".
pub fn coerce_nullable<T: DeserializeOwned + Default>(
    attribute: &str,
    value: &Value,
) -> Result<T, SchemaError> {
    if value.is_null() {
        Ok(T::default())
    } else {
        coerce(attribute, value)
    }
}

/// Coerce `attribute` out of a field entry, defaulting when it is absent or `null`.
pub fn attribute_or_default<T: DeserializeOwned + Default>(
    entry: &Map<String, Value>,
    attribute: &str,
) -> Result<T, SchemaError> {
    match entry.get(attribute) {
        Some(value) => coerce_nullable(attribute, value),
        None => Ok(T::default()),
    }
}

/// Text attributes (`prefix`, `postfix`, `value`) accept strings and numbers.
pub fn coerce_text(attribute: &str, value: &Value) -> Result<String, SchemaError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(SchemaError::invalid(
            attribute,
            format!("expected a string, found {}", describe(other)),
        )),
    }
}

/// Text attribute out of a field entry, empty when absent.
pub fn text_or_default(entry: &Map<String, Value>, attribute: &str) -> Result<String, SchemaError> {
    match entry.get(attribute) {
        Some(value) => coerce_text(attribute, value),
        None => Ok(String::new()),
    }
}

/// Field names must be present, non-empty strings.
pub fn coerce_name(value: &Value) -> Result<String, SchemaError> {
    match value {
        Value::Null => Err(SchemaError::MissingName),
        Value::String(name) if name.is_empty() => Err(SchemaError::EmptyName),
        Value::String(name) => Ok(name.clone()),
        other => Err(SchemaError::invalid(
            "name",
            format!("expected a string, found {}", describe(other)),
        )),
    }
}

/// `multiline` accepts booleans only.
pub fn coerce_flag(attribute: &str, value: &Value) -> Result<bool, SchemaError> {
    match value {
        Value::Null => Ok(false),
        other => bool::deserialize(other).map_err(|e| SchemaError::invalid(attribute, e)),
    }
}
