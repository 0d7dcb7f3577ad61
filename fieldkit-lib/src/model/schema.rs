//! Schemas derived from model metadata

use std::collections::BTreeSet;
use std::sync::Arc;

use super::FieldRegistry;
use super::ModelMetadata;
use super::ModelValidator;
use crate::Schema;
use crate::Validator;
use crate::Value;
use crate::config::FieldDefaults;
use crate::error::ConfigError;
use crate::field::Field;

/// Which model properties generate fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PropertyFilter {
    /// Every property.
    #[default]
    All,
    /// Only the named properties.
    Include(BTreeSet<String>),
    /// Every property except the named ones.
    Exclude(BTreeSet<String>),
}

impl PropertyFilter {
    /// Returns `true` if the property generates a field.
    pub fn allows(&self, property: &str) -> bool {
        match self {
            Self::All => true,
            Self::Include(names) => names.contains(property),
            Self::Exclude(names) => !names.contains(property),
        }
    }

    fn names(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::All => None,
            Self::Include(names) | Self::Exclude(names) => Some(names),
        }
    }
}

/// A field schema derived from a model's property metadata.
///
/// Built once per model (or per include/exclude variant) and shared by the
/// [`ModelValidator`]s it creates.
///
/// # Example
///
/// ```
/// use fieldkit_lib::model::{ModelMetadata, ModelSchema, PropertyMetadata};
///
/// let metadata = ModelMetadata::new("Product")
///     .with_property(PropertyMetadata::string("name").required())
///     .with_property(PropertyMetadata::money("price"))
///     .with_property(PropertyMetadata::integer("stock"));
///
/// let schema = ModelSchema::builder(metadata)
///     .include(["name", "price"])
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.schema().names().collect::<Vec<_>>(), ["name", "price"]);
/// ```
#[derive(Debug, Clone)]
pub struct ModelSchema {
    metadata: Arc<ModelMetadata>,
    schema: Arc<Schema>,
    filter: PropertyFilter,
}

impl ModelSchema {
    /// Derives a schema covering every property with the default registry.
    pub fn new(metadata: impl Into<Arc<ModelMetadata>>) -> Result<Self, ConfigError> {
        Self::builder(metadata).build()
    }

    /// Starts configuring a derived schema.
    pub fn builder(metadata: impl Into<Arc<ModelMetadata>>) -> ModelSchemaBuilder {
        ModelSchemaBuilder {
            metadata: metadata.into(),
            include: None,
            exclude: None,
            registry: None,
            defaults: FieldDefaults::default(),
        }
    }

    /// Returns the model metadata.
    pub fn metadata(&self) -> &Arc<ModelMetadata> {
        &self.metadata
    }

    /// Returns the derived field schema.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the property filter the schema was built with.
    pub fn filter(&self) -> &PropertyFilter {
        &self.filter
    }

    /// Returns the field for a property.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.schema.get(name)
    }

    /// Binds input to the schema.
    pub fn validator<I, K, V>(&self, input: I) -> Result<ModelValidator, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let validator = Validator::new(&self.schema, input)?;
        Ok(ModelValidator::new(Arc::clone(&self.metadata), validator))
    }

    /// Binds a decoded JSON object to the schema.
    pub fn validator_from_json(&self, json: serde_json::Value) -> Result<ModelValidator, ConfigError> {
        let validator = Validator::from_json(&self.schema, json)?;
        Ok(ModelValidator::new(Arc::clone(&self.metadata), validator))
    }
}

/// Configures which properties a [`ModelSchema`] covers and how they map to fields.
#[derive(Debug)]
pub struct ModelSchemaBuilder {
    metadata: Arc<ModelMetadata>,
    include: Option<BTreeSet<String>>,
    exclude: Option<BTreeSet<String>>,
    registry: Option<FieldRegistry>,
    defaults: FieldDefaults,
}

impl ModelSchemaBuilder {
    /// Restricts the schema to the named properties.
    pub fn include<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include
            .get_or_insert_with(BTreeSet::new)
            .extend(properties.into_iter().map(Into::into));
        self
    }

    /// Leaves the named properties out of the schema.
    pub fn exclude<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude
            .get_or_insert_with(BTreeSet::new)
            .extend(properties.into_iter().map(Into::into));
        self
    }

    /// Sets the property type to field kind lookup.
    pub fn registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the defaults for options a property leaves unset.
    pub fn defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolves the filter and builds one field per selected property.
    pub fn build(self) -> Result<ModelSchema, ConfigError> {
        let filter = match (self.include, self.exclude) {
            (Some(_), Some(_)) => return Err(ConfigError::IncludeAndExclude),
            (Some(include), None) => PropertyFilter::Include(include),
            (None, Some(exclude)) => PropertyFilter::Exclude(exclude),
            (None, None) => PropertyFilter::All,
        };

        if let Some(names) = filter.names() {
            if let Some(unknown) = names.iter().find(|n| self.metadata.property(n).is_none()) {
                return Err(ConfigError::unknown_property(&self.metadata.kind, unknown));
            }
        }

        let registry = self.registry.unwrap_or_default();
        let fields = self
            .metadata
            .properties
            .iter()
            .filter(|property| filter.allows(&property.name))
            .map(|property| {
                (
                    property.name.clone(),
                    registry.field_for(property, &self.defaults),
                )
            });
        let schema = Schema::builder().fields(fields).build()?;

        log::debug!(
            "derived {} of {} properties from model '{}'",
            schema.len(),
            self.metadata.properties.len(),
            self.metadata.kind
        );

        Ok(ModelSchema {
            metadata: self.metadata,
            schema: Arc::new(schema),
            filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyMetadata;

    fn integer_model() -> ModelMetadata {
        ModelMetadata::new("IntegerModel")
            .with_property(PropertyMetadata::integer("integer"))
            .with_property(PropertyMetadata::integer("integer_required").required())
            .with_property(PropertyMetadata::integer("integer_repeated").repeated())
            .with_property(PropertyMetadata::integer("integer_choices").with_choices([1i64, 2]))
            .with_property(PropertyMetadata::integer("integer_default").with_default(0i64))
    }

    fn names(schema: &ModelSchema) -> BTreeSet<&str> {
        schema.schema().names().collect()
    }

    #[test]
    fn test_fields() {
        let schema = ModelSchema::new(integer_model()).unwrap();
        assert_eq!(
            names(&schema),
            BTreeSet::from([
                "integer",
                "integer_required",
                "integer_repeated",
                "integer_choices",
                "integer_default",
            ])
        );
        for field in schema.schema().fields() {
            assert_eq!(field.kind_name(), "integer");
        }
        assert_eq!(schema.filter(), &PropertyFilter::All);
    }

    #[test]
    fn test_include() {
        let schema = ModelSchema::builder(integer_model())
            .include(["integer", "integer_required"])
            .build()
            .unwrap();
        assert_eq!(names(&schema), BTreeSet::from(["integer", "integer_required"]));
        for field in schema.schema().fields() {
            assert_eq!(field.kind_name(), "integer");
        }
    }

    #[test]
    fn test_exclude() {
        let schema = ModelSchema::builder(integer_model())
            .exclude(["integer", "integer_required"])
            .build()
            .unwrap();
        assert_eq!(
            names(&schema),
            BTreeSet::from(["integer_repeated", "integer_choices", "integer_default"])
        );
    }

    #[test]
    fn test_include_exclude_definition_error() {
        let err = ModelSchema::builder(integer_model())
            .exclude(["integer", "integer_required"])
            .include(["integer", "integer_required"])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::IncludeAndExclude);
    }

    #[test]
    fn test_unknown_property() {
        let err = ModelSchema::builder(integer_model())
            .include(["integer", "nope"])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::unknown_property("IntegerModel", "nope"));
    }

    #[test]
    fn test_property_options() {
        let schema = ModelSchema::new(integer_model()).unwrap();
        assert!(schema.get("integer_required").unwrap().is_required());
        assert!(schema.get("integer_repeated").unwrap().is_repeated());
        assert_eq!(
            schema.get("integer_choices").unwrap().choices(),
            Some(&[Value::Int(1), Value::Int(2)][..])
        );
        assert_eq!(
            schema.get("integer_default").unwrap().default_value(),
            Some(&Value::Int(0))
        );
    }

    #[test]
    fn test_unknown_input_key() {
        let schema = ModelSchema::builder(integer_model())
            .include(["integer"])
            .build()
            .unwrap();
        let err = schema.validator([("integer_required", "1")]).unwrap_err();
        assert_eq!(err, ConfigError::unknown_field("integer_required"));
    }
}
