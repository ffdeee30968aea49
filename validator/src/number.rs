//! Inclusive integer range validator.

use burger_core::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::validator::Validator;

/// Accepts integers in the closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    min: i64,
    max: i64,
}

impl Number {
    /// Create a range validator. Fails if `min > max`.
    pub fn new(min: i64, max: i64) -> ValidationResult<Self> {
        if min > max {
            return Err(ValidationError::invalid_bounds(min, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Check if `value` lies within the bounds.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Validator for Number {
    type Output = i64;

    fn validate(&self, value: &Value) -> ValidationResult<i64> {
        // Bool and whole-number floats are not integers
        let int = value
            .as_int()
            .ok_or_else(|| ValidationError::not_an_integer(value.type_name()))?;

        if !self.contains(int) {
            return Err(ValidationError::out_of_range(int, self.min, self.max));
        }

        Ok(int)
    }

    fn to_value(output: &i64) -> Value {
        Value::Int(*output)
    }

    fn describe(&self) -> String {
        format!("integer in [{}..{}]", self.min, self.max)
    }
}
