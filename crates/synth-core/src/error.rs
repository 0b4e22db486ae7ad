//! Error types for field construction.

use serde_json::Value;

/// A field definition that cannot be turned into a canonical field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// The field entry is not a key-value mapping
    #[error("Field definition must be a mapping, found {0}")]
    NotAMapping(String),

    /// The required `name` attribute is absent
    #[error("Field definition is missing required attribute 'name'")]
    MissingName,

    /// The `name` attribute is an empty string
    #[error("Field name must not be empty")]
    EmptyName,

    /// A key that is not one of the canonical field attributes
    #[error("Unknown field attribute: {0}")]
    UnknownAttribute(String),

    /// An attribute literal that cannot be coerced to its canonical type
    #[error("Invalid value for attribute '{attribute}': {reason}")]
    InvalidAttribute { attribute: String, reason: String },
}

impl SchemaError {
    pub fn invalid(attribute: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidAttribute {
            attribute: attribute.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the attribute this error is about, when there is one.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::MissingName | Self::EmptyName => Some("name"),
            Self::UnknownAttribute(attribute) | Self::InvalidAttribute { attribute, .. } => {
                Some(attribute)
            }
            Self::NotAMapping(_) => None,
        }
    }
}

/// Short description of a JSON value's shape, for error messages.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("sequence of {} items", items.len()),
        Value::Object(map) => format!("mapping with {} keys", map.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!(3)), "number `3`");
        assert_eq!(describe(&json!("a")), "string \"a\"");
        assert_eq!(describe(&json!([1, 2])), "sequence of 2 items");
    }

    #[test]
    fn test_attribute() {
        assert_eq!(SchemaError::MissingName.attribute(), Some("name"));
        assert_eq!(
            SchemaError::invalid("bbox", "bad").attribute(),
            Some("bbox")
        );
        assert_eq!(SchemaError::NotAMapping("null".into()).attribute(), None);
    }
}
