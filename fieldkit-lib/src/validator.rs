//! Validator instances

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::Schema;
use crate::Value;
use crate::error::ConfigError;
use crate::error::Error;
use crate::error::TransformError;
use crate::error::ValidationErrors;

/// Raw input bound to a [`Schema`].
///
/// Validators are cheap and meant to be created per request: the schema is
/// shared, and each instance owns one value per declared field (null when the
/// input did not supply it).
///
/// # Example
///
/// ```
/// use fieldkit_lib::{Schema, Validator, Value};
/// use fieldkit_lib::field::Field;
///
/// let schema = Schema::builder()
///     .field("age", Field::integer().required())
///     .build()
///     .unwrap()
///     .into_shared();
///
/// let validator = Validator::new(&schema, [("age", "forty")]).unwrap();
/// assert_eq!(validator.validate().get("age"), Some("age must be integer"));
///
/// let validator = Validator::new(&schema, [("age", "40")]).unwrap();
/// assert!(validator.is_valid());
/// assert_eq!(validator.transform().unwrap()["age"], Value::Int(40));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Validator {
    /// Binds input to the schema.
    ///
    /// Every declared field gets the supplied value or null. Names that are
    /// not declared are rejected with [`ConfigError::UnknownField`].
    pub fn new<I, K, V>(schema: &Arc<Schema>, input: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut validator = Self::empty(schema);
        for (name, value) in input {
            validator.set(name.as_ref(), value)?;
        }
        Ok(validator)
    }

    /// Creates a validator with every field null.
    pub fn empty(schema: &Arc<Schema>) -> Self {
        Self {
            schema: Arc::clone(schema),
            values: vec![Value::Null; schema.len()],
        }
    }

    /// Binds a decoded JSON object to the schema.
    ///
    /// Anything other than an object is rejected with
    /// [`ConfigError::InputNotObject`].
    pub fn from_json(schema: &Arc<Schema>, json: serde_json::Value) -> Result<Self, ConfigError> {
        match json {
            serde_json::Value::Object(map) => Self::new(schema, map),
            other => Err(ConfigError::input_not_object(&other)),
        }
    }

    /// Returns the schema this validator binds against.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the value bound to a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.values[i])
    }

    /// Replaces the value bound to a field.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let i = self
            .position(name)
            .ok_or_else(|| ConfigError::unknown_field(name))?;
        self.values[i] = value.into();
        Ok(())
    }

    /// Iterates over `(field, value)` pairs in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema.names().zip(self.values.iter())
    }

    /// Runs every field's rule against its bound value.
    ///
    /// Only failing fields appear in the result.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, value) in self.schema.fields().iter().zip(&self.values) {
            if let Some(message) = field.validate(value) {
                errors.insert(field.name(), message);
            }
        }
        log::debug!("validated {} fields, {} failed", self.values.len(), errors.len());
        errors
    }

    /// Returns `true` if every field passes validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Transforms every bound value, one entry per declared field.
    ///
    /// Validity is not checked. Call [`validate`](Self::validate) first; values
    /// that do not coerce fail with a [`TransformError`].
    pub fn transform(&self) -> Result<BTreeMap<String, Value>, TransformError> {
        self.schema
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| Ok((field.name().to_string(), field.transform(value)?)))
            .collect()
    }

    /// Validates, then transforms if every field passed.
    pub fn validate_and_transform(&self) -> Result<BTreeMap<String, Value>, Error> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }
        Ok(self.transform()?)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.schema.position(name)
    }
}
