//! Date field kind

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

use super::FieldKind;
use crate::Value;
use crate::config::DEFAULT_DATE_FORMAT;
use crate::error::TransformError;

/// Dates and date-times parsed with a `chrono` format string.
///
/// Formats without a time component produce midnight. Values that are
/// already date-times pass through unchanged.
///
/// # Example
///
/// ```
/// use fieldkit_lib::field::{DateField, Field};
/// use fieldkit_lib::Value;
///
/// let field = Field::new(DateField::with_format("%Y/%m/%d %H:%M:%S")).named("d");
/// assert_eq!(field.validate(&Value::from("2000/09/30 23:59:a")), Some("d must be a date".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateField {
    format: String,
}

impl Default for DateField {
    fn default() -> Self {
        Self::with_format(DEFAULT_DATE_FORMAT)
    }
}

impl DateField {
    /// Creates a date kind using `%Y/%m/%d`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a date kind using the given format.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Returns the format string.
    pub fn format(&self) -> &str {
        &self.format
    }

    fn parse(&self, value: &Value) -> Option<NaiveDateTime> {
        match value {
            Value::DateTime(dt) => Some(*dt),
            Value::String(s) => NaiveDateTime::parse_from_str(s, &self.format)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, &self.format)
                        .ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                }),
            _ => None,
        }
    }
}

impl FieldKind for DateField {
    fn kind_name(&self) -> &'static str {
        "date"
    }

    fn validate_field(&self, name: &str, value: &Value) -> Option<String> {
        self.parse(value)
            .is_none()
            .then(|| format!("{} must be a date", name))
    }

    fn transform_field(&self, name: &str, value: &Value) -> Result<Value, TransformError> {
        self.parse(value)
            .map(Value::DateTime)
            .ok_or_else(|| TransformError::parse(name, "date", value))
    }
}
