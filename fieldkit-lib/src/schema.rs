//! Field schemas
//!
//! A [`Schema`] is the declared set of fields a [`Validator`](crate::Validator)
//! binds input against. It is built once and shared by every validator
//! instance.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::field::Field;

/// An immutable, ordered mapping from field name to [`Field`].
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
///
/// use fieldkit_lib::Schema;
/// use fieldkit_lib::field::Field;
///
/// static PERSON: LazyLock<Schema> = LazyLock::new(|| {
///     Schema::builder()
///         .field("name", Field::string().required())
///         .field("age", Field::integer())
///         .build()
///         .expect("valid schema")
/// });
///
/// assert_eq!(PERSON.names().collect::<Vec<_>>(), ["name", "age"]);
/// assert_eq!(PERSON.get("name").unwrap().name(), "name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Starts declaring a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Returns the field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns `true` if a field with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Wraps the schema for sharing between validators.
    pub fn into_shared(self) -> Arc<Schema> {
        Arc::new(self)
    }
}

/// Collects `(name, field)` pairs and builds a [`Schema`].
///
/// Each field is bound to its name when the schema is built.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, Field)>,
}

impl SchemaBuilder {
    /// Declares a field.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Declares several fields.
    pub fn fields<I, N>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, Field)>,
        N: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(name, field)| (name.into(), field)));
        self
    }

    /// Builds the schema, failing on empty or duplicate names.
    pub fn build(self) -> Result<Schema, ConfigError> {
        let mut schema = Schema::default();

        for (name, mut field) in self.fields {
            if name.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            if schema.index.contains_key(&name) {
                return Err(ConfigError::duplicate_field(name));
            }
            field.bind(&name);
            schema.index.insert(name, schema.fields.len());
            schema.fields.push(field);
        }

        log::debug!(
            "built schema with {} fields: {:?}",
            schema.len(),
            schema.names().collect::<Vec<_>>()
        );
        Ok(schema)
    }
}
