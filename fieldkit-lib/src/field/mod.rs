//! Fields and field kinds
//!
//! A [`Field`] owns the generic rules every attribute shares (required,
//! default, choices, repeated). The type-specific rule is delegated to a
//! [`FieldKind`], which is the extension point for new field types.
//!
//! # Example
//!
//! ```
//! use fieldkit_lib::field::{Field, IntegerField};
//! use fieldkit_lib::Value;
//!
//! let field = Field::new(IntegerField::new().lower(1)).named("n");
//!
//! assert_eq!(field.validate(&Value::from("0")), Some("n must be greater than 1".to_string()));
//! assert_eq!(field.transform(&Value::from("7")).unwrap(), Value::Int(7));
//! ```

mod base;
mod date;
mod decimal;
mod integer;
mod string;

use std::sync::Arc;

pub use base::*;
pub use date::*;
pub use decimal::*;
pub use integer::*;
pub use string::*;

use crate::Value;
use crate::error::TransformError;

/// Type-specific validation and coercion for a field.
///
/// Implementations only ever see non-blank values: [`Field`] handles null and
/// empty strings (required checks, defaults) before delegating.
pub trait FieldKind: std::fmt::Debug + Send + Sync {
    /// Short identifier of the kind, e.g. `"integer"`.
    fn kind_name(&self) -> &'static str;

    /// Checks a single non-blank value, returning an error message on failure.
    fn validate_field(&self, name: &str, value: &Value) -> Option<String> {
        let _ = (name, value);
        None
    }

    /// Converts a single non-blank value to the kind's target type.
    fn transform_field(&self, name: &str, value: &Value) -> Result<Value, TransformError> {
        let _ = name;
        Ok(value.clone())
    }
}

/// The validation and coercion rule for one named attribute.
///
/// A field never stores the value it checks. Values live on a
/// [`Validator`](crate::Validator) and are passed in.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    required: bool,
    default: Option<Value>,
    choices: Option<Vec<Value>>,
    repeated: bool,
    kind: Arc<dyn FieldKind>,
}

impl Field {
    /// Creates an optional, single-valued field of the given kind.
    pub fn new(kind: impl FieldKind + 'static) -> Self {
        Self::from_kind(Arc::new(kind))
    }

    /// Creates a field from a shared kind.
    pub fn from_kind(kind: Arc<dyn FieldKind>) -> Self {
        Self {
            name: String::new(),
            required: false,
            default: None,
            choices: None,
            repeated: false,
            kind,
        }
    }

    /// Creates a field with no type-specific rule.
    pub fn base() -> Self {
        Self::new(BaseField)
    }

    /// Creates an integer field without bounds.
    pub fn integer() -> Self {
        Self::new(IntegerField::new())
    }

    /// Creates a decimal field with the default precision.
    pub fn decimal() -> Self {
        Self::new(DecimalField::new())
    }

    /// Creates a string field with the default length limit.
    pub fn string() -> Self {
        Self::new(StringField::new())
    }

    /// Creates a date field with the default format.
    pub fn date() -> Self {
        Self::new(DateField::new())
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Sets the name used in error messages.
    ///
    /// Fields registered on a [`Schema`](crate::Schema) are renamed to their
    /// registration name, so this is only needed for standalone fields.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the field as required.
    pub fn required(self) -> Self {
        self.with_required(true)
    }

    /// Sets whether the field is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Marks the field as holding a list of values.
    pub fn repeated(self) -> Self {
        self.with_repeated(true)
    }

    /// Sets whether the field holds a list of values.
    pub fn with_repeated(mut self, repeated: bool) -> Self {
        self.repeated = repeated;
        self
    }

    /// Sets the value used when the input is blank.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        let default = default.into();
        self.default = (!default.is_null()).then_some(default);
        self
    }

    /// Restricts the field to the given values.
    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut unique: Vec<Value> = Vec::new();
        for choice in choices.into_iter().map(Into::into) {
            if !unique.contains(&choice) {
                unique.push(choice);
            }
        }
        self.choices = Some(unique);
        self
    }

    pub(crate) fn bind(&mut self, name: &str) {
        self.name = name.to_string();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns `true` if the field holds a list of values.
    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    /// Returns the default value, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the allowed values, if restricted.
    pub fn choices(&self) -> Option<&[Value]> {
        self.choices.as_deref()
    }

    /// Returns the field kind.
    pub fn kind(&self) -> &dyn FieldKind {
        self.kind.as_ref()
    }

    /// Returns the short identifier of the field kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Checks a raw value, returning `None` if it is valid.
    ///
    /// Checks run in order: required, choices, then the kind's own rule.
    /// Repeated fields apply choices and the kind rule to each element and
    /// report the first failure.
    pub fn validate(&self, value: &Value) -> Option<String> {
        log::trace!("validating field '{}' ({})", self.name, self.kind_name());

        if self.repeated {
            return self.validate_repeated(value);
        }

        if value.is_blank() {
            if self.default.is_some() {
                return None;
            }
            if self.required {
                return Some(self.required_message());
            }
            return self.check_choice(value);
        }

        self.check_choice(value)
            .or_else(|| self.kind.validate_field(&self.name, value))
    }

    fn validate_repeated(&self, value: &Value) -> Option<String> {
        let items = as_items(value);

        if self.required
            && self.default.is_none()
            && (items.is_empty() || items.iter().any(Value::is_blank))
        {
            return Some(self.required_message());
        }

        items
            .iter()
            .filter(|item| !item.is_blank())
            .find_map(|item| {
                self.check_choice(item)
                    .or_else(|| self.kind.validate_field(&self.name, item))
            })
    }

    fn check_choice(&self, value: &Value) -> Option<String> {
        let choices = self.choices.as_ref()?;

        if choices.contains(value) {
            return None;
        }
        if !value.is_blank() {
            if let Ok(coerced) = self.kind.transform_field(&self.name, value) {
                if choices.contains(&coerced) {
                    return None;
                }
            }
        }

        let allowed = choices
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("{} must be one of: {}", self.name, allowed))
    }

    fn required_message(&self) -> String {
        format!("{} is required", self.name)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Converts a raw value to the field's normalized form.
    ///
    /// Blank values, and empty lists on repeated fields, become the default
    /// (or null). The value must already have passed
    /// [`validate`](Self::validate); values that do not coerce are reported
    /// as a [`TransformError`].
    pub fn transform(&self, value: &Value) -> Result<Value, TransformError> {
        log::trace!("transforming field '{}' ({})", self.name, self.kind_name());

        if value.is_blank() || (self.repeated && as_items(value).is_empty()) {
            return Ok(self.default.clone().unwrap_or(Value::Null));
        }

        if self.repeated {
            let items = as_items(value)
                .iter()
                .map(|item| {
                    if item.is_blank() {
                        Ok(Value::Null)
                    } else {
                        self.kind.transform_field(&self.name, item)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Value::List(items));
        }

        self.kind.transform_field(&self.name, value)
    }
}

/// Views a raw value as the element list of a repeated field.
fn as_items(value: &Value) -> &[Value] {
    match value {
        Value::List(items) => items,
        v if v.is_blank() => &[],
        v => std::slice::from_ref(v),
    }
}
