//! Decimal field kind

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::FromPrimitive;

use super::FieldKind;
use crate::Value;
use crate::config::DEFAULT_DECIMAL_PLACES;
use crate::error::TransformError;

/// Fixed-precision decimal numbers with optional inclusive bounds.
///
/// Transformed values are rounded half away from zero to `decimal_places`
/// and always carry exactly that many places, so `1.3` becomes `1.30`.
///
/// # Example
///
/// ```
/// use fieldkit_lib::field::{Field, DecimalField};
/// use fieldkit_lib::Value;
/// use rust_decimal::Decimal;
///
/// let field = Field::new(DecimalField::new().decimal_places(3));
/// let value = field.transform(&Value::from(1.339999999)).unwrap();
/// assert_eq!(value, Value::Decimal(Decimal::new(1340, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalField {
    decimal_places: u32,
    lower: Option<Decimal>,
    upper: Option<Decimal>,
}

impl Default for DecimalField {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            lower: None,
            upper: None,
        }
    }
}

impl DecimalField {
    /// Creates a decimal kind with two decimal places and no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimal places values are rounded to.
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Sets the smallest accepted value.
    pub fn lower(mut self, lower: impl Into<Decimal>) -> Self {
        self.lower = Some(lower.into());
        self
    }

    /// Sets the largest accepted value.
    pub fn upper(mut self, upper: impl Into<Decimal>) -> Self {
        self.upper = Some(upper.into());
        self
    }

    /// Returns the number of decimal places.
    pub fn places(&self) -> u32 {
        self.decimal_places
    }

    /// Returns the lower bound, if any.
    pub fn lower_bound(&self) -> Option<Decimal> {
        self.lower
    }

    /// Returns the upper bound, if any.
    pub fn upper_bound(&self) -> Option<Decimal> {
        self.upper
    }
}

impl FieldKind for DecimalField {
    fn kind_name(&self) -> &'static str {
        "decimal"
    }

    fn validate_field(&self, name: &str, value: &Value) -> Option<String> {
        let Some(d) = parse_decimal(value) else {
            return Some(format!("{} must be a number", name));
        };
        if let Some(lower) = self.lower.filter(|lower| d < *lower) {
            return Some(format!("{} must be greater than {}", name, lower));
        }
        if let Some(upper) = self.upper.filter(|upper| d > *upper) {
            return Some(format!("{} must be less than {}", name, upper));
        }
        None
    }

    fn transform_field(&self, name: &str, value: &Value) -> Result<Value, TransformError> {
        let d = parse_decimal(value).ok_or_else(|| TransformError::parse(name, "decimal", value))?;
        let mut rounded =
            d.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimal_places);
        Ok(Value::Decimal(rounded))
    }
}

/// Parses decimals from numeric values and plain decimal strings.
fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Int(n) => Some(Decimal::from(*n)),
        Value::Float(f) => Decimal::from_f64(*f),
        Value::Decimal(d) => Some(*d),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn dec(s: &str) -> Value {
        Value::Decimal(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_transformation() {
        let field = Field::decimal();
        assert_eq!(field.transform(&Value::Null).unwrap(), Value::Null);
        assert_eq!(field.transform(&Value::from("")).unwrap(), Value::Null);
        assert_eq!(field.transform(&Value::Int(0)).unwrap(), dec("0.00"));
        assert_eq!(field.transform(&Value::Float(1.339999999)).unwrap(), dec("1.34"));
        assert_eq!(field.transform(&Value::from("0")).unwrap(), dec("0.00"));
        assert_eq!(field.transform(&Value::from("1.34")).unwrap(), dec("1.34"));

        let field = Field::new(DecimalField::new().decimal_places(3));
        assert_eq!(field.transform(&Value::Float(1.339999999)).unwrap(), dec("1.340"));
    }

    #[test]
    fn test_transformation_keeps_scale() {
        let field = Field::new(DecimalField::new().decimal_places(3));
        let Value::Decimal(d) = field.transform(&Value::Float(1.339999999)).unwrap() else {
            panic!("expected decimal");
        };
        assert_eq!(d.to_string(), "1.340");
    }

    #[test]
    fn test_rounding_midpoint() {
        let field = Field::decimal();
        assert_eq!(field.transform(&Value::from("0.125")).unwrap(), dec("0.13"));
        assert_eq!(field.transform(&Value::from("-0.125")).unwrap(), dec("-0.13"));
    }

    #[test]
    fn test_validation() {
        let field = Field::decimal().named("n");
        assert_eq!(field.validate(&Value::Null), None);
        assert_eq!(field.validate(&Value::from("")), None);
        assert_eq!(field.validate(&Value::Int(0)), None);
        assert_eq!(field.validate(&Value::Int(1)), None);
        assert_eq!(field.validate(&Value::from("0")), None);
        assert_eq!(field.validate(&Value::from("1")), None);
        let error = Some("n must be a number".to_string());
        assert_eq!(field.validate(&Value::from("foo")), error);
        assert_eq!(field.validate(&Value::from("123h")), error);
        assert_eq!(field.validate(&Value::from("0x456")), error);
    }

    #[test]
    fn test_validation_lower() {
        let field = Field::new(DecimalField::new().lower(1)).named("n");
        assert_eq!(field.validate(&Value::from("1")), None);
        assert_eq!(
            field.validate(&Value::from("0")),
            Some("n must be greater than 1".to_string())
        );
    }

    #[test]
    fn test_validation_upper() {
        let field = Field::new(DecimalField::new().upper(1)).named("n");
        assert_eq!(field.validate(&Value::from("1")), None);
        assert_eq!(
            field.validate(&Value::from("2")),
            Some("n must be less than 1".to_string())
        );
    }

    #[test]
    fn test_fractional_bound_is_named_literally() {
        let field = Field::new(DecimalField::new().decimal_places(3).lower(Decimal::new(1, 3))).named("n");
        assert_eq!(field.validate(&Value::from("0.001")), None);
        assert_eq!(
            field.validate(&Value::from("0.0001")),
            Some("n must be greater than 0.001".to_string())
        );
    }
}
