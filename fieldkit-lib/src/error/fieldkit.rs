//! Top-level error type

use super::ConfigError;
use super::PropertyError;
use super::TransformError;
use super::ValidationErrors;

/// Any error produced by this crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A schema or validator was declared with invalid parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One or more fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A value could not be transformed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// A record property could not be read.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl Error {
    /// Returns the validation errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
