//! Field defaults configuration

use serde::Deserialize;
use serde::Serialize;

/// Number of decimal places a decimal field rounds to when none is given.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Maximum number of characters a string field accepts when none is given.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Date format a date field parses with when none is given.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Defaults applied to fields derived from model metadata.
///
/// A property that carries its own precision, length limit or format keeps it;
/// these values fill in whatever the property leaves unset.
///
/// # Example
///
/// ```
/// use fieldkit_lib::config::FieldDefaults;
///
/// let defaults = FieldDefaults::default()
///     .with_decimal_places(4)
///     .with_date_format("%Y-%m-%d");
/// assert_eq!(defaults.max_length, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDefaults {
    /// Decimal places for decimal fields.
    ///
    /// Default: 2
    pub decimal_places: u32,

    /// Maximum length in characters for string fields.
    ///
    /// Default: 500
    pub max_length: usize,

    /// `chrono` format string for date fields.
    ///
    /// Default: `%Y/%m/%d`
    pub date_format: String,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            max_length: DEFAULT_MAX_LENGTH,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl FieldDefaults {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decimal places.
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Sets the string max length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}
