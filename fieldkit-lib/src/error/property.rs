//! PropertyError for Record accessors

/// Error type for property access operations on Record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PropertyError {
    /// The requested property does not exist in the record.
    #[error("Property '{property}' not found in record")]
    Missing { property: String },

    /// The property exists but has a different type than requested.
    #[error("Property '{property}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl PropertyError {
    /// Creates a new missing property error.
    pub fn missing(property: impl Into<String>) -> Self {
        Self::Missing {
            property: property.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        property: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            property: property.into(),
            expected,
            actual,
        }
    }
}
