//! Dynamic model record

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Model;
use super::ModelMetadata;
use crate::Value;
use crate::error::PropertyError;

/// An in-memory model instance.
///
/// Records hold property values as a map from property name to [`Value`].
/// Typed getter methods provide checked access.
///
/// # Example
///
/// ```
/// use fieldkit_lib::model::Record;
///
/// let record = Record::new("Product")
///     .set("name", "Widget")
///     .set("stock", 12i64);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Widget"));
/// assert_eq!(record.get_int("stock").unwrap(), Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The model kind.
    kind: String,

    /// The datastore key, once assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,

    /// The property values.
    properties: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: None,
            properties: BTreeMap::new(),
        }
    }

    /// Creates a new empty record with the given key.
    pub fn with_key(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::new(kind)
        }
    }

    /// Returns the model kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the datastore key, if assigned.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Sets the datastore key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    // =========================================================================
    // Raw property access
    // =========================================================================

    /// Returns a reference to the property value, if it exists.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Returns `true` if the record contains the given property.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Returns a reference to all properties.
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// Sets a property value (builder pattern).
    pub fn set(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// Inserts a property value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Removes a property and returns its value.
    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.properties.remove(property)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if the property is missing or has the wrong type.
    // Return Ok(None) only if the property exists and is Value::Null.
    // =========================================================================

    /// Gets a string property value.
    pub fn get_string(&self, property: &str) -> Result<Option<&str>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(PropertyError::type_mismatch(
                property,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean property value.
    pub fn get_bool(&self, property: &str) -> Result<Option<bool>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(PropertyError::type_mismatch(property, "bool", other.type_name())),
        }
    }

    /// Gets an integer property value.
    pub fn get_int(&self, property: &str) -> Result<Option<i64>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(PropertyError::type_mismatch(property, "int", other.type_name())),
        }
    }

    /// Gets a float property value.
    pub fn get_float(&self, property: &str) -> Result<Option<f64>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)),
            Some(other) => Err(PropertyError::type_mismatch(property, "float", other.type_name())),
        }
    }

    /// Gets a Decimal property value.
    pub fn get_decimal(&self, property: &str) -> Result<Option<Decimal>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(other) => Err(PropertyError::type_mismatch(
                property,
                "decimal",
                other.type_name(),
            )),
        }
    }

    /// Gets a date-time property value.
    pub fn get_datetime(&self, property: &str) -> Result<Option<NaiveDateTime>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(PropertyError::type_mismatch(
                property,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a list property value.
    pub fn get_list(&self, property: &str) -> Result<Option<&[Value]>, PropertyError> {
        match self.properties.get(property) {
            None => Err(PropertyError::missing(property)),
            Some(Value::Null) => Ok(None),
            Some(Value::List(items)) => Ok(Some(items)),
            Some(other) => Err(PropertyError::type_mismatch(property, "list", other.type_name())),
        }
    }
}

impl Model for Record {
    fn create(metadata: &ModelMetadata) -> Self {
        Self::new(metadata.kind.clone())
    }

    fn set_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }
}
