//! Named, validated value holder.
//!
//! A `Field` pairs a validator with the value it guards. Every write goes
//! through the validator; a field never holds a value its validator rejected,
//! and it cannot exist without a value, so there is no read-before-write case.

use burger_core::Value;

use crate::error::ValidationResult;
use crate::validator::Validator;

/// A named slot whose value is checked by `V` on every assignment.
#[derive(Debug, Clone)]
pub struct Field<V: Validator> {
    name: &'static str,
    validator: V,
    value: V::Output,
}

impl<V: Validator> Field<V> {
    /// Create a field by validating its initial value.
    pub fn new(
        name: &'static str,
        validator: V,
        value: impl Into<Value>,
    ) -> ValidationResult<Self> {
        let value = check(name, &validator, &value.into())?;
        Ok(Self {
            name,
            validator,
            value,
        })
    }

    /// Validate `value` and store it. On failure the current value is kept.
    pub fn set(&mut self, value: impl Into<Value>) -> ValidationResult<()> {
        self.value = check(self.name, &self.validator, &value.into())?;
        Ok(())
    }

    /// Get the stored value.
    pub fn get(&self) -> &V::Output {
        &self.value
    }

    /// Get the stored value as a `Value`.
    pub fn to_value(&self) -> Value {
        V::to_value(&self.value)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }
}

fn check<V: Validator>(name: &str, validator: &V, value: &Value) -> ValidationResult<V::Output> {
    match validator.validate(value) {
        Ok(accepted) => {
            tracing::trace!(field = name, %value, "assignment accepted");
            Ok(accepted)
        }
        Err(e) => {
            tracing::debug!(
                field = name,
                %value,
                constraint = %validator.describe(),
                error = %e,
                "assignment rejected"
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::{Number, OneOf};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_field_holds_initial_value() {
        // GIVEN/WHEN
        let field = Field::new("cheese", Number::new(0, 2).unwrap(), 1).unwrap();

        // THEN
        assert_eq!(field.name(), "cheese");
        assert_eq!(*field.get(), 1);
        assert_eq!(field.to_value(), Value::Int(1));
    }

    #[test]
    fn test_new_field_rejects_invalid_initial_value() {
        let result = Field::new("cutlets", Number::new(1, 3).unwrap(), 0);

        assert_eq!(result.unwrap_err(), ValidationError::out_of_range(0, 1, 3));
    }

    #[test]
    fn test_set_then_get_returns_value() {
        // GIVEN
        let mut field = Field::new("tomatoes", Number::new(0, 3).unwrap(), 0).unwrap();

        // WHEN/THEN
        for v in 0..=3i64 {
            field.set(v).unwrap();
            assert_eq!(*field.get(), v);
        }
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        // GIVEN
        let mut field = Field::new("eggs", Number::new(0, 2).unwrap(), 2).unwrap();

        // WHEN
        let out_of_range = field.set(3).unwrap_err();
        let wrong_type = field.set(1.5).unwrap_err();

        // THEN
        assert_eq!(out_of_range.kind(), ErrorKind::RangeOrMembership);
        assert_eq!(wrong_type.kind(), ErrorKind::Type);
        assert_eq!(*field.get(), 2);
    }

    #[test]
    fn test_one_of_field() {
        // GIVEN
        let sauces = OneOf::new(["ketchup", "mayo", "burger"]).unwrap();
        let mut field = Field::new("sauce", sauces, "mayo").unwrap();

        // WHEN
        field.set("burger").unwrap();
        let err = field.set("bbq").unwrap_err();

        // THEN
        assert_eq!(err.kind(), ErrorKind::RangeOrMembership);
        assert_eq!(field.get(), &Value::from("burger"));
    }

    #[test]
    fn test_validator_shared_between_fields() {
        // GIVEN
        let bounds = Number::new(0, 2).unwrap();

        // WHEN
        let a = Field::new("a", bounds, 0).unwrap();
        let b = Field::new("b", bounds, 2).unwrap();

        // THEN
        assert_eq!(a.validator(), b.validator());
        assert_eq!((*a.get(), *b.get()), (0, 2));
    }
}
