//! Enumerated option validator.

use std::sync::Arc;

use burger_core::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::validator::Validator;

/// Accepts exactly the members of a fixed, non-empty option set.
///
/// Membership is structural `Value` equality: `Int(1)` does not match
/// `Float(1.0)`. Clones share the option storage.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    options: Arc<[Value]>,
}

impl OneOf {
    /// Create an option validator.
    ///
    /// Fails if `options` is empty or holds a NaN, which equals nothing.
    pub fn new<I, T>(options: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let options: Arc<[Value]> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(ValidationError::EmptyOptions);
        }
        if let Some(nan) = options
            .iter()
            .find(|o| o.as_float().is_some_and(f64::is_nan))
        {
            return Err(ValidationError::unmatchable_option(nan.to_string()));
        }
        Ok(Self { options })
    }

    /// The allowed values, in the order they were given.
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.options.contains(value)
    }

    fn options_list(&self) -> String {
        self.options
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Validator for OneOf {
    type Output = Value;

    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        if !self.contains(value) {
            return Err(ValidationError::not_one_of(
                value.to_string(),
                self.options_list(),
            ));
        }
        Ok(value.clone())
    }

    fn to_value(output: &Value) -> Value {
        output.clone()
    }

    fn describe(&self) -> String {
        format!("one of [{}]", self.options_list())
    }
}
