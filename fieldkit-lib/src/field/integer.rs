//! Integer field kind

use rust_decimal::prelude::ToPrimitive;

use super::FieldKind;
use crate::Value;
use crate::error::TransformError;

/// Base-10 integers with optional inclusive bounds.
///
/// # Example
///
/// ```
/// use fieldkit_lib::field::{FieldKind, IntegerField};
/// use fieldkit_lib::Value;
///
/// let kind = IntegerField::new().lower(1).upper(10);
/// assert_eq!(kind.validate_field("n", &Value::from("11")), Some("n must be less than 10".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerField {
    lower: Option<i64>,
    upper: Option<i64>,
}

impl IntegerField {
    /// Creates an integer kind without bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smallest accepted value.
    pub fn lower(mut self, lower: i64) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Sets the largest accepted value.
    pub fn upper(mut self, upper: i64) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Returns the lower bound, if any.
    pub fn lower_bound(&self) -> Option<i64> {
        self.lower
    }

    /// Returns the upper bound, if any.
    pub fn upper_bound(&self) -> Option<i64> {
        self.upper
    }
}

impl FieldKind for IntegerField {
    fn kind_name(&self) -> &'static str {
        "integer"
    }

    fn validate_field(&self, name: &str, value: &Value) -> Option<String> {
        let Some(n) = parse_integer(value) else {
            return Some(format!("{} must be integer", name));
        };
        if let Some(lower) = self.lower.filter(|lower| n < *lower) {
            return Some(format!("{} must be greater than {}", name, lower));
        }
        if let Some(upper) = self.upper.filter(|upper| n > *upper) {
            return Some(format!("{} must be less than {}", name, upper));
        }
        None
    }

    fn transform_field(&self, name: &str, value: &Value) -> Result<Value, TransformError> {
        parse_integer(value)
            .map(Value::Int)
            .ok_or_else(|| TransformError::parse(name, "integer", value))
    }
}

/// Parses integers from integer values, whole numbers and base-10 strings.
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(f) if f.fract() == 0.0 => f.to_i64(),
        Value::Decimal(d) if d.fract().is_zero() => d.to_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_transformation() {
        let field = Field::integer();
        assert_eq!(field.transform(&Value::Null).unwrap(), Value::Null);
        assert_eq!(field.transform(&Value::from("")).unwrap(), Value::Null);
        assert_eq!(field.transform(&Value::Int(0)).unwrap(), Value::Int(0));
        assert_eq!(field.transform(&Value::Int(1)).unwrap(), Value::Int(1));
        assert_eq!(field.transform(&Value::from("0")).unwrap(), Value::Int(0));
        assert_eq!(field.transform(&Value::from("1")).unwrap(), Value::Int(1));
        assert_eq!(field.transform(&Value::Float(3.0)).unwrap(), Value::Int(3));
    }

    #[test]
    fn test_validation() {
        let field = Field::integer().named("n");
        assert_eq!(field.validate(&Value::Null), None);
        assert_eq!(field.validate(&Value::from("")), None);
        assert_eq!(field.validate(&Value::Int(0)), None);
        assert_eq!(field.validate(&Value::Int(1)), None);
        assert_eq!(field.validate(&Value::from("0")), None);
        assert_eq!(field.validate(&Value::from("1")), None);
        assert_eq!(field.validate(&Value::from(" 12 ")), None);
        let error = Some("n must be integer".to_string());
        assert_eq!(field.validate(&Value::from("foo")), error);
        assert_eq!(field.validate(&Value::from("123h")), error);
        assert_eq!(field.validate(&Value::from("0x456")), error);
        assert_eq!(field.validate(&Value::Float(1.5)), error);
        assert_eq!(field.validate(&Value::Bool(true)), error);
    }

    #[test]
    fn test_validation_lower() {
        let field = Field::new(IntegerField::new().lower(1)).named("n");
        assert_eq!(field.validate(&Value::from("1")), None);
        assert_eq!(
            field.validate(&Value::from("0")),
            Some("n must be greater than 1".to_string())
        );
    }

    #[test]
    fn test_validation_upper() {
        let field = Field::new(IntegerField::new().upper(1)).named("n");
        assert_eq!(field.validate(&Value::from("1")), None);
        assert_eq!(
            field.validate(&Value::from("2")),
            Some("n must be less than 1".to_string())
        );
    }

    #[test]
    fn test_out_of_range_numbers_are_not_integers() {
        let field = Field::integer().named("n");
        let error = Some("n must be integer".to_string());
        let inputs = [
            serde_json::json!(1e20),
            serde_json::json!(u64::MAX),
            serde_json::json!(-1e20),
        ];
        for json in inputs {
            let value = Value::from(json);
            assert_eq!(field.validate(&value), error);
            assert!(field.transform(&value).is_err());
        }
        assert_eq!(field.validate(&Value::Float(f64::INFINITY)), error);
        assert_eq!(field.validate(&Value::Float(f64::NAN)), error);
        assert_eq!(field.validate(&Value::Float(-9.0e15)), None);
    }
}
