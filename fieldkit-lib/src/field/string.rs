//! String field kind

use super::FieldKind;
use crate::Value;
use crate::config::DEFAULT_MAX_LENGTH;
use crate::error::TransformError;

/// Text with a maximum length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringField {
    max_length: usize,
}

impl Default for StringField {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl StringField {
    /// Creates a string kind accepting up to 500 characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of characters.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Returns the maximum number of characters.
    pub fn limit(&self) -> usize {
        self.max_length
    }
}

impl FieldKind for StringField {
    fn kind_name(&self) -> &'static str {
        "string"
    }

    fn validate_field(&self, name: &str, value: &Value) -> Option<String> {
        let len = match value {
            Value::List(_) => return Some(format!("{} must be a string", name)),
            Value::String(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        };
        (len > self.max_length).then(|| {
            format!(
                "{} has {} characters and it must have less than {}",
                name, len, self.max_length
            )
        })
    }

    fn transform_field(&self, name: &str, value: &Value) -> Result<Value, TransformError> {
        match value {
            Value::List(_) => Err(TransformError::parse(name, "string", value)),
            Value::String(_) => Ok(value.clone()),
            other => Ok(Value::String(other.to_string())),
        }
    }
}
