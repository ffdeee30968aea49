//! The validator capability.

use burger_core::Value;

use crate::error::ValidationResult;

/// Decides whether a value may be stored.
///
/// Implementations only inspect the value. Storing is the caller's job, which
/// is why an accepted value is handed back in its typed form rather than
/// written anywhere.
pub trait Validator {
    /// The typed form of an accepted value.
    type Output: Clone;

    /// Check `value`, returning its typed form if it is acceptable.
    fn validate(&self, value: &Value) -> ValidationResult<Self::Output>;

    /// Convert an accepted value back into a `Value`.
    fn to_value(output: &Self::Output) -> Value;

    /// Short human-readable description of the constraint.
    fn describe(&self) -> String;
}
