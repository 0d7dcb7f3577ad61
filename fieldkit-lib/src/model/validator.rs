//! Validators bound to a model

use std::collections::BTreeMap;
use std::sync::Arc;

use super::ModelMetadata;
use crate::Validator;
use crate::Value;
use crate::error::ConfigError;
use crate::error::Error;
use crate::error::TransformError;
use crate::error::ValidationErrors;

/// A model instance that validated values can be written onto.
///
/// This is the write side of the datastore binding. Persisting the instance
/// stays the caller's responsibility.
pub trait Model {
    /// Creates an empty instance of the described model.
    fn create(metadata: &ModelMetadata) -> Self
    where
        Self: Sized;

    /// Sets a property value.
    fn set_property(&mut self, name: &str, value: Value);
}

/// A [`Validator`] whose fields were derived from a model, able to populate
/// model instances.
///
/// Created by [`ModelSchema::validator`](super::ModelSchema::validator).
#[derive(Debug, Clone)]
pub struct ModelValidator {
    metadata: Arc<ModelMetadata>,
    validator: Validator,
}

impl ModelValidator {
    pub(crate) fn new(metadata: Arc<ModelMetadata>, validator: Validator) -> Self {
        Self {
            metadata,
            validator,
        }
    }

    /// Returns the model metadata.
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Returns the underlying validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Consumes this and returns the underlying validator.
    pub fn into_validator(self) -> Validator {
        self.validator
    }

    /// Returns the value bound to a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.validator.get(name)
    }

    /// Replaces the value bound to a field.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        self.validator.set(name, value)
    }

    /// Runs every field's rule; see [`Validator::validate`].
    pub fn validate(&self) -> ValidationErrors {
        self.validator.validate()
    }

    /// Returns `true` if every field passes validation.
    pub fn is_valid(&self) -> bool {
        self.validator.is_valid()
    }

    /// Transforms every bound value; see [`Validator::transform`].
    pub fn transform(&self) -> Result<BTreeMap<String, Value>, TransformError> {
        self.validator.transform()
    }

    /// Validates, then transforms if every field passed.
    pub fn validate_and_transform(&self) -> Result<BTreeMap<String, Value>, Error> {
        self.validator.validate_and_transform()
    }

    /// Writes every transformed value onto a model instance.
    ///
    /// A new instance is created when `model` is `None`. Values are written
    /// under the property name. Nothing is written if any value fails to
    /// transform.
    pub fn populate<M: Model>(&self, model: Option<M>) -> Result<M, TransformError> {
        let mut model = model.unwrap_or_else(|| M::create(&self.metadata));
        self.populate_into(&mut model)?;
        Ok(model)
    }

    /// Writes every transformed value onto an existing model instance.
    pub fn populate_into<M: Model>(&self, model: &mut M) -> Result<(), TransformError> {
        let values = self.validator.transform()?;
        log::debug!(
            "populating {} properties on '{}'",
            values.len(),
            self.metadata.kind
        );
        for (name, value) in values {
            model.set_property(&name, value);
        }
        Ok(())
    }
}
