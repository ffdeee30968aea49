//! Burger Validator
//!
//! Validate values before they are stored in a field.
//!
//! Responsibilities:
//! - Check integer quantities against an inclusive range (`Number`)
//! - Check values against a fixed option set (`OneOf`)
//! - Hold a named, always-valid value and re-validate every assignment (`Field`)
//! - Classify rejections as type or range/membership failures

mod error;
mod field;
mod number;
mod one_of;
mod validator;

pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use field::Field;
pub use number::Number;
pub use one_of::OneOf;
pub use validator::Validator;
