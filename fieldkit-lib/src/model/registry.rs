//! Property type to field kind lookup

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::PropertyMetadata;
use super::PropertyType;
use crate::config::FieldDefaults;
use crate::field::BaseField;
use crate::field::DateField;
use crate::field::DecimalField;
use crate::field::Field;
use crate::field::FieldKind;
use crate::field::IntegerField;
use crate::field::StringField;

/// Builds the field kind for a property.
pub type FieldConstructor =
    Arc<dyn Fn(&PropertyMetadata, &FieldDefaults) -> Arc<dyn FieldKind> + Send + Sync>;

/// Maps property types to field kind constructors.
///
/// Types without an entry get a [`BaseField`]. The default registry covers
/// every built-in [`PropertyType`]; bindings with custom types register their
/// own constructors.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use fieldkit_lib::field::StringField;
/// use fieldkit_lib::model::{FieldRegistry, PropertyMetadata, PropertyType};
/// use fieldkit_lib::config::FieldDefaults;
///
/// let registry = FieldRegistry::default().with(
///     PropertyType::Custom("Email".into()),
///     |_, _| Arc::new(StringField::new().max_length(254)),
/// );
///
/// let property = PropertyMetadata::new("email", PropertyType::Custom("Email".into()));
/// let field = registry.field_for(&property, &FieldDefaults::default());
/// assert_eq!(field.kind_name(), "string");
/// ```
#[derive(Clone)]
pub struct FieldRegistry {
    constructors: HashMap<PropertyType, FieldConstructor>,
}

impl FieldRegistry {
    /// Creates a registry with no entries; every property maps to [`BaseField`].
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers a constructor, returning the one it replaces.
    pub fn register<F>(&mut self, property_type: PropertyType, constructor: F) -> Option<FieldConstructor>
    where
        F: Fn(&PropertyMetadata, &FieldDefaults) -> Arc<dyn FieldKind> + Send + Sync + 'static,
    {
        self.constructors.insert(property_type, Arc::new(constructor))
    }

    /// Registers a constructor (builder pattern).
    pub fn with<F>(mut self, property_type: PropertyType, constructor: F) -> Self
    where
        F: Fn(&PropertyMetadata, &FieldDefaults) -> Arc<dyn FieldKind> + Send + Sync + 'static,
    {
        self.register(property_type, constructor);
        self
    }

    /// Returns `true` if the type has a registered constructor.
    pub fn contains(&self, property_type: &PropertyType) -> bool {
        self.constructors.contains_key(property_type)
    }

    /// Builds the field for a property.
    ///
    /// The kind comes from the registered constructor; required, repeated,
    /// choices and default are copied from the property.
    pub fn field_for(&self, property: &PropertyMetadata, defaults: &FieldDefaults) -> Field {
        let kind = match self.constructors.get(&property.property_type) {
            Some(constructor) => constructor(property, defaults),
            None => {
                log::debug!(
                    "no field kind registered for {:?}, using base field for '{}'",
                    property.property_type,
                    property.name
                );
                Arc::new(BaseField)
            }
        };

        let mut field = Field::from_kind(kind)
            .named(&property.name)
            .with_required(property.required)
            .with_repeated(property.repeated);
        if let Some(choices) = &property.choices {
            field = field.with_choices(choices.iter().cloned());
        }
        if let Some(default) = &property.default {
            field = field.with_default(default.clone());
        }
        field
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::empty()
            .with(PropertyType::Integer, integer_kind)
            .with(PropertyType::BigInt, integer_kind)
            .with(PropertyType::Float, decimal_kind)
            .with(PropertyType::Decimal, decimal_kind)
            .with(PropertyType::Money, decimal_kind)
            .with(PropertyType::String, string_kind)
            .with(PropertyType::Text, string_kind)
            .with(PropertyType::DateTime, date_kind)
            .with(PropertyType::Date, date_kind)
    }
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("types", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn integer_kind(property: &PropertyMetadata, _: &FieldDefaults) -> Arc<dyn FieldKind> {
    let mut kind = IntegerField::new();
    if let Some(lower) = property.lower {
        kind = kind.lower(saturating_i64(lower.ceil()));
    }
    if let Some(upper) = property.upper {
        kind = kind.upper(saturating_i64(upper.floor()));
    }
    Arc::new(kind)
}

/// Converts a whole decimal to `i64`, clamping values outside its range.
fn saturating_i64(d: Decimal) -> i64 {
    d.to_i64().unwrap_or_else(|| {
        log::warn!("integer bound {} is out of range, clamping", d);
        if d.is_sign_negative() { i64::MIN } else { i64::MAX }
    })
}

fn decimal_kind(property: &PropertyMetadata, defaults: &FieldDefaults) -> Arc<dyn FieldKind> {
    let mut kind = DecimalField::new()
        .decimal_places(property.decimal_places.unwrap_or(defaults.decimal_places));
    if let Some(lower) = property.lower {
        kind = kind.lower(lower);
    }
    if let Some(upper) = property.upper {
        kind = kind.upper(upper);
    }
    Arc::new(kind)
}

fn string_kind(property: &PropertyMetadata, defaults: &FieldDefaults) -> Arc<dyn FieldKind> {
    Arc::new(StringField::new().max_length(property.max_length.unwrap_or(defaults.max_length)))
}

fn date_kind(property: &PropertyMetadata, defaults: &FieldDefaults) -> Arc<dyn FieldKind> {
    let format = property.format.as_deref().unwrap_or(&defaults.date_format);
    Arc::new(DateField::with_format(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn field(property: PropertyMetadata) -> Field {
        FieldRegistry::default().field_for(&property, &FieldDefaults::default())
    }

    #[test]
    fn test_type_dispatch() {
        assert_eq!(field(PropertyMetadata::integer("a")).kind_name(), "integer");
        assert_eq!(field(PropertyMetadata::big_int("a")).kind_name(), "integer");
        assert_eq!(field(PropertyMetadata::float("a")).kind_name(), "decimal");
        assert_eq!(field(PropertyMetadata::decimal("a")).kind_name(), "decimal");
        assert_eq!(field(PropertyMetadata::money("a")).kind_name(), "decimal");
        assert_eq!(field(PropertyMetadata::string("a")).kind_name(), "string");
        assert_eq!(field(PropertyMetadata::text("a")).kind_name(), "string");
        assert_eq!(field(PropertyMetadata::date_time("a")).kind_name(), "date");
        assert_eq!(field(PropertyMetadata::date("a")).kind_name(), "date");
        assert_eq!(field(PropertyMetadata::boolean("a")).kind_name(), "base");
        assert_eq!(field(PropertyMetadata::json("a")).kind_name(), "base");
    }

    #[test]
    fn test_property_options() {
        let f = field(PropertyMetadata::integer("n").required());
        assert!(f.is_required());

        let f = field(PropertyMetadata::integer("n").repeated());
        assert!(f.is_repeated());

        let f = field(PropertyMetadata::integer("n").with_choices([1i64, 2]));
        assert_eq!(f.choices(), Some(&[Value::Int(1), Value::Int(2)][..]));

        let f = field(PropertyMetadata::integer("n").with_default(0i64));
        assert_eq!(f.default_value(), Some(&Value::Int(0)));
    }

    #[test]
    fn test_bounds_are_copied() {
        let f = field(PropertyMetadata::integer("n").with_lower(1).with_upper(2));
        assert_eq!(f.validate(&Value::from("1")), None);
        assert_eq!(
            f.validate(&Value::from("3")),
            Some("n must be less than 2".to_string())
        );

        let f = field(
            PropertyMetadata::decimal("d")
                .with_decimal_places(3)
                .with_lower(Decimal::new(1, 3)),
        );
        assert_eq!(
            f.validate(&Value::from("0.0001")),
            Some("d must be greater than 0.001".to_string())
        );
        assert_eq!(
            f.transform(&Value::from("0.001")).unwrap(),
            Value::Decimal(Decimal::new(1, 3))
        );
    }

    #[test]
    fn test_out_of_range_integer_bounds_clamp() {
        let huge = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        let f = field(PropertyMetadata::integer("n").with_lower(-huge).with_upper(huge));
        assert_eq!(f.validate(&Value::Int(i64::MIN)), None);
        assert_eq!(f.validate(&Value::Int(i64::MAX)), None);

        let f = field(PropertyMetadata::integer("n").with_lower(huge));
        assert_eq!(
            f.validate(&Value::Int(0)),
            Some(format!("n must be greater than {}", i64::MAX))
        );
    }

    #[test]
    fn test_defaults_fill_unset_options() {
        let defaults = FieldDefaults::default()
            .with_max_length(3)
            .with_date_format("%d.%m.%Y");
        let registry = FieldRegistry::default();

        let s = registry.field_for(&PropertyMetadata::string("s"), &defaults);
        assert!(s.validate(&Value::from("abcd")).is_some());

        let s = registry.field_for(&PropertyMetadata::string("s").with_max_length(10), &defaults);
        assert_eq!(s.validate(&Value::from("abcd")), None);

        let d = registry.field_for(&PropertyMetadata::date("d"), &defaults);
        assert_eq!(d.validate(&Value::from("30.09.2000")), None);
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = FieldRegistry::default();
        let previous = registry.register(PropertyType::Boolean, |_, _| Arc::new(IntegerField::new()));
        assert!(previous.is_none());
        assert!(registry.contains(&PropertyType::Boolean));

        let f = registry.field_for(&PropertyMetadata::boolean("b"), &FieldDefaults::default());
        assert_eq!(f.kind_name(), "integer");
    }
}
