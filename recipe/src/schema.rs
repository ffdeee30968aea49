//! Validator configuration for burger recipes.

use std::sync::OnceLock;

use burger_validator::{Number, OneOf, ValidationResult};

use crate::error::{RecipeError, RecipeResult};

/// Field names in declaration order.
pub const FIELD_NAMES: [&str; 6] = ["buns", "cheese", "tomatoes", "cutlets", "eggs", "sauce"];

/// The validators guarding each recipe field.
///
/// Cheap to clone; one schema can back any number of recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct BurgerSchema {
    pub buns: Number,
    pub cheese: Number,
    pub tomatoes: Number,
    pub cutlets: Number,
    pub eggs: Number,
    pub sauce: OneOf,
}

impl BurgerSchema {
    /// The standard burger bounds.
    pub fn standard() -> ValidationResult<Self> {
        Ok(Self {
            buns: Number::new(2, 3)?,
            cheese: Number::new(0, 2)?,
            tomatoes: Number::new(0, 3)?,
            cutlets: Number::new(1, 3)?,
            eggs: Number::new(0, 2)?,
            sauce: OneOf::new(["ketchup", "mayo", "burger"])?,
        })
    }

    /// The standard schema, built on first use and shared afterwards.
    pub fn shared() -> RecipeResult<&'static Self> {
        static STANDARD: OnceLock<ValidationResult<BurgerSchema>> = OnceLock::new();
        STANDARD
            .get_or_init(Self::standard)
            .as_ref()
            .map_err(|e| RecipeError::Schema(e.clone()))
    }
}
