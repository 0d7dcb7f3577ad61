//! Transform errors

use crate::Value;

/// Error returned when a value cannot be coerced to a field's target type.
///
/// Transforming assumes the value already passed validation, so this
/// normally means `transform` was called without checking `validate` first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// The value could not be parsed as the expected type.
    #[error("Field '{field}' cannot be converted to {expected}: {value}")]
    Parse {
        field: String,
        expected: &'static str,
        value: Value,
    },
}

impl TransformError {
    /// Creates a new parse error.
    pub fn parse(field: impl Into<String>, expected: &'static str, value: &Value) -> Self {
        Self::Parse {
            field: field.into(),
            expected,
            value: value.clone(),
        }
    }
}
