//! Recipe error types.

use burger_validator::{ErrorKind, ValidationError};
use thiserror::Error;

/// Result type for recipe operations.
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Errors that can occur while building or modifying a recipe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    #[error("Invalid value for {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Invalid schema: {0}")]
    Schema(#[source] ValidationError),
}

impl RecipeError {
    pub fn invalid_field(field: &'static str, source: ValidationError) -> Self {
        Self::InvalidField { field, source }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// The field that rejected the value, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            Self::UnknownField { field } => Some(field.as_str()),
            Self::Schema(_) => None,
        }
    }

    /// Classify the underlying validation failure.
    ///
    /// Unknown fields have no validator and therefore no kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidField { source, .. } => Some(source.kind()),
            Self::Schema(source) => Some(source.kind()),
            Self::UnknownField { .. } => None,
        }
    }
}
