//! Model and property metadata

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::Value;

/// Description of a datastore model: its kind and declared properties.
///
/// This is the only thing the model adapter knows about the datastore. Any
/// binding that can describe its models this way can be validated.
///
/// # Example
///
/// ```
/// use fieldkit_lib::model::{ModelMetadata, PropertyMetadata};
///
/// let product = ModelMetadata::new("Product")
///     .with_property(PropertyMetadata::string("name").required())
///     .with_property(PropertyMetadata::money("price"));
///
/// assert_eq!(product.property_names().collect::<Vec<_>>(), ["name", "price"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    /// The model kind (e.g., "Product").
    pub kind: String,

    /// The declared properties, in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyMetadata>,
}

impl ModelMetadata {
    /// Creates metadata for a model without properties.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: Vec::new(),
        }
    }

    /// Adds a property (builder pattern).
    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    /// Returns the property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

/// Metadata for a single model property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetadata {
    /// The property name, also the attribute written by populate.
    pub name: String,

    /// The property type.
    pub property_type: PropertyType,

    /// Whether a value must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Whether the property holds a list of values.
    #[serde(default)]
    pub repeated: bool,

    /// Allowed values, if restricted.
    #[serde(default)]
    pub choices: Option<Vec<Value>>,

    /// Value used when none is supplied.
    #[serde(default)]
    pub default: Option<Value>,

    /// Minimum value for numeric properties.
    #[serde(default)]
    pub lower: Option<Decimal>,

    /// Maximum value for numeric properties.
    #[serde(default)]
    pub upper: Option<Decimal>,

    /// Decimal places for decimal and money properties.
    #[serde(default)]
    pub decimal_places: Option<u32>,

    /// Maximum length in characters for string properties.
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Parse format for date properties.
    #[serde(default)]
    pub format: Option<String>,
}

impl PropertyMetadata {
    /// Creates an unconstrained property of the given type.
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            required: false,
            repeated: false,
            choices: None,
            default: None,
            lower: None,
            upper: None,
            decimal_places: None,
            max_length: None,
            format: None,
        }
    }

    /// Creates a boolean property.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Boolean)
    }

    /// Creates an integer property.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Integer)
    }

    /// Creates a big integer property.
    pub fn big_int(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::BigInt)
    }

    /// Creates a floating point property.
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Float)
    }

    /// Creates a decimal property.
    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Decimal)
    }

    /// Creates a currency property: two decimal places, never negative.
    pub fn money(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Money)
            .with_decimal_places(2)
            .with_lower(Decimal::ZERO)
    }

    /// Creates a single-line string property.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::String)
    }

    /// Creates a multi-line text property.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Text)
    }

    /// Creates a date and time property.
    pub fn date_time(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::DateTime)
    }

    /// Creates a date-only property.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Date)
    }

    /// Creates a structured JSON property.
    pub fn json(name: impl Into<String>) -> Self {
        Self::new(name, PropertyType::Json)
    }

    /// Marks the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the property as repeated.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Restricts the property to the given values.
    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets the minimum value.
    pub fn with_lower(mut self, lower: impl Into<Decimal>) -> Self {
        self.lower = Some(lower.into());
        self
    }

    /// Sets the maximum value.
    pub fn with_upper(mut self, upper: impl Into<Decimal>) -> Self {
        self.upper = Some(upper.into());
        self
    }

    /// Sets the decimal places.
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the date format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Property type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Boolean (true/false).
    Boolean,
    /// Integer.
    Integer,
    /// Big integer.
    BigInt,
    /// Double-precision floating point.
    Float,
    /// Decimal number.
    Decimal,
    /// Currency value.
    Money,
    /// Single-line text.
    String,
    /// Multi-line text.
    Text,
    /// Date and time.
    DateTime,
    /// Date only.
    Date,
    /// Structured JSON.
    Json,
    /// Type defined by the datastore binding.
    Custom(String),
}
