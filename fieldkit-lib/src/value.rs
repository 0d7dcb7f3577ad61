//! Value enum for dynamic field values

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A dynamic value that flows through validation and transformation.
///
/// Raw input (request parameters, JSON bodies) arrives as loosely typed values,
/// mostly strings. Fields validate those and transform them into one of the
/// typed variants.
///
/// # Type Mapping
///
/// | Field kind | Transformed variant |
/// |------------|---------------------|
/// | Integer | `Int` |
/// | Decimal | `Decimal` |
/// | String | `String` |
/// | Date | `DateTime` |
/// | repeated | `List` |
///
/// # Example
///
/// ```
/// use fieldkit_lib::Value;
///
/// let name = Value::from("Contoso");
/// let count = Value::from(42i64);
/// let tags = Value::from(vec!["a", "b"]);
/// let empty = Value::Null;
/// assert!(empty.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Date and time without a timezone.
    DateTime(NaiveDateTime),
    /// Sequence of values, used by repeated fields.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for values that count as "not supplied": null or an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` for values a custom rule may treat as false.
    ///
    /// Null, `false`, zero, empty strings and empty lists are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Decimal(d) => d.is_zero(),
            Value::String(s) => s.is_empty(),
            Value::DateTime(_) => false,
            Value::List(items) => items.is_empty(),
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the list items if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{}", s),
            Value::DateTime(dt) => write!(f, "{}", dt),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Converts decoded JSON into a raw input value.
///
/// Numbers become `Int` when they fit in an `i64`, `Float` otherwise. Objects
/// have no counterpart and are kept as their JSON text.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            obj @ serde_json::Value::Object(_) => Value::String(obj.to_string()),
        }
    }
}

/// Deserializes through [`serde_json::Value`], so strings stay strings.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("").is_blank());
        assert!(!Value::from(" ").is_blank());
        assert!(!Value::from(0i64).is_blank());
        assert!(!Value::List(vec![]).is_blank());
    }

    #[test]
    fn test_falsy_values() {
        assert!(Value::from(false).is_falsy());
        assert!(Value::from(0i64).is_falsy());
        assert!(Value::List(vec![]).is_falsy());
        assert!(!Value::from(true).is_falsy());
        assert!(!Value::from("x").is_falsy());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "n": 3,
            "f": 1.5,
            "s": "abc",
            "l": ["a", null],
        });
        let serde_json::Value::Object(map) = json else {
            panic!("expected object");
        };

        assert_eq!(Value::from(map["n"].clone()), Value::Int(3));
        assert_eq!(Value::from(map["f"].clone()), Value::Float(1.5));
        assert_eq!(Value::from(map["s"].clone()), Value::from("abc"));
        assert_eq!(
            Value::from(map["l"].clone()),
            Value::List(vec![Value::from("a"), Value::Null])
        );
    }

    #[test]
    fn test_deserialize_keeps_strings() {
        let value: Value = serde_json::from_str(r#"["1.5", 2, "2000/09/30"]"#).unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::from("1.5"), Value::Int(2), Value::from("2000/09/30")])
        );
    }

    #[test]
    fn test_display_list() {
        let value = Value::from(vec![1i64, 2]);
        assert_eq!(value.to_string(), "[1, 2]");
    }

    #[test]
    fn test_serialize_untagged() {
        let value = Value::from(vec![Value::from("a"), Value::Int(1), Value::Null]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"["a",1,null]"#);
    }
}
