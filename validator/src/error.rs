//! Validation error types.

use thiserror::Error;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value is not of the primitive type the validator expects.
    Type,
    /// The value has the right type but lies outside the allowed range or set.
    RangeOrMembership,
    /// The validator itself was configured with impossible constraints.
    Configuration,
}

/// Errors that can occur while building or applying a validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Quantity should be integer, got {actual}.")]
    NotAnInteger { actual: String },

    #[error("Quantity should not be less than {min} and greater than {max}, got {value}.")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("Expected {value} to be one of [{options}].")]
    NotOneOf { value: String, options: String },

    #[error("Invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    #[error("Option set must not be empty")]
    EmptyOptions,

    #[error("Option {option} can never be matched")]
    UnmatchableOption { option: String },
}

impl ValidationError {
    pub fn not_an_integer(actual: impl Into<String>) -> Self {
        Self::NotAnInteger {
            actual: actual.into(),
        }
    }

    pub fn out_of_range(value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange { value, min, max }
    }

    pub fn not_one_of(value: impl Into<String>, options: impl Into<String>) -> Self {
        Self::NotOneOf {
            value: value.into(),
            options: options.into(),
        }
    }

    pub fn invalid_bounds(min: i64, max: i64) -> Self {
        Self::InvalidBounds { min, max }
    }

    pub fn unmatchable_option(option: impl Into<String>) -> Self {
        Self::UnmatchableOption {
            option: option.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAnInteger { .. } => ErrorKind::Type,
            Self::OutOfRange { .. } | Self::NotOneOf { .. } => ErrorKind::RangeOrMembership,
            Self::InvalidBounds { .. } | Self::EmptyOptions | Self::UnmatchableOption { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}
