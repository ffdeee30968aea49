//! Burger Recipe
//!
//! A burger recipe whose six ingredient quantities are validated fields.
//!
//! # Module Structure
//!
//! - `schema` - The validators configuring each field
//! - `recipe` - `BurgerRecipe` and its construction/assignment surface
//! - `error` - Error types for rejected recipes

mod error;
mod recipe;
mod schema;

pub use burger_core::Value;
pub use burger_validator::{ErrorKind, ValidationError};
pub use error::{RecipeError, RecipeResult};
pub use recipe::{BurgerRecipe, Ingredients};
pub use schema::{BurgerSchema, FIELD_NAMES};
