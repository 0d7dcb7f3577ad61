//! Configuration (invalid parameters) errors

/// Errors raised while declaring a schema or constructing a validator.
///
/// These describe programmer mistakes, not bad user input, and are never
/// collected into a validation result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Both an include list and an exclude list were given for one model schema.
    #[error("Invalid parameters: include and exclude cannot be used together")]
    IncludeAndExclude,

    /// An input key does not match any declared field.
    #[error("Invalid parameters: unknown field '{field}'")]
    UnknownField { field: String },

    /// An include/exclude entry names a property the model does not have.
    #[error("Invalid parameters: model '{model}' has no property '{property}'")]
    UnknownProperty { model: String, property: String },

    /// The same field name was declared twice.
    #[error("Invalid parameters: field '{field}' declared more than once")]
    DuplicateField { field: String },

    /// A field was declared with an empty name.
    #[error("Invalid parameters: field name cannot be empty")]
    EmptyFieldName,

    /// Input handed to a validator as JSON was not an object.
    #[error("Invalid parameters: input must be a JSON object, found {found}")]
    InputNotObject { found: &'static str },
}

impl ConfigError {
    /// Creates a new unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a new unknown property error.
    pub fn unknown_property(model: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            model: model.into(),
            property: property.into(),
        }
    }

    /// Creates a new input error from the JSON value that was not an object.
    pub fn input_not_object(input: &serde_json::Value) -> Self {
        let found = match input {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::InputNotObject { found }
    }

    /// Creates a new duplicate field error.
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }
}
