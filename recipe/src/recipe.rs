//! The burger recipe record.

use burger_core::Value;
use burger_validator::{Field, Number, OneOf, Validator};

use crate::error::{RecipeError, RecipeResult};
use crate::schema::BurgerSchema;

/// Raw, unvalidated values for every recipe field.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredients {
    pub buns: Value,
    pub cheese: Value,
    pub tomatoes: Value,
    pub cutlets: Value,
    pub eggs: Value,
    pub sauce: Value,
}

/// A burger recipe. Every field is validated on construction and on each
/// later assignment, so a recipe that exists is always valid.
#[derive(Debug, Clone)]
pub struct BurgerRecipe {
    buns: Field<Number>,
    cheese: Field<Number>,
    tomatoes: Field<Number>,
    cutlets: Field<Number>,
    eggs: Field<Number>,
    sauce: Field<OneOf>,
}

impl BurgerRecipe {
    /// Build a recipe against the shared standard schema.
    pub fn new(
        buns: impl Into<Value>,
        cheese: impl Into<Value>,
        tomatoes: impl Into<Value>,
        cutlets: impl Into<Value>,
        eggs: impl Into<Value>,
        sauce: impl Into<Value>,
    ) -> RecipeResult<Self> {
        Self::with_schema(
            BurgerSchema::shared()?,
            Ingredients {
                buns: buns.into(),
                cheese: cheese.into(),
                tomatoes: tomatoes.into(),
                cutlets: cutlets.into(),
                eggs: eggs.into(),
                sauce: sauce.into(),
            },
        )
    }

    /// Build a recipe against a caller-provided schema.
    ///
    /// Fields are assigned cheese, tomatoes, cutlets, eggs, buns, sauce; the
    /// first rejected field is the one reported.
    pub fn with_schema(schema: &BurgerSchema, ingredients: Ingredients) -> RecipeResult<Self> {
        let Ingredients {
            buns,
            cheese,
            tomatoes,
            cutlets,
            eggs,
            sauce,
        } = ingredients;

        let cheese = field("cheese", schema.cheese, cheese)?;
        let tomatoes = field("tomatoes", schema.tomatoes, tomatoes)?;
        let cutlets = field("cutlets", schema.cutlets, cutlets)?;
        let eggs = field("eggs", schema.eggs, eggs)?;
        let buns = field("buns", schema.buns, buns)?;
        let sauce = field("sauce", schema.sauce.clone(), sauce)?;

        let recipe = Self {
            buns,
            cheese,
            tomatoes,
            cutlets,
            eggs,
            sauce,
        };
        tracing::trace!(?recipe, "recipe built");
        Ok(recipe)
    }

    pub fn buns(&self) -> i64 {
        *self.buns.get()
    }

    pub fn cheese(&self) -> i64 {
        *self.cheese.get()
    }

    pub fn tomatoes(&self) -> i64 {
        *self.tomatoes.get()
    }

    pub fn cutlets(&self) -> i64 {
        *self.cutlets.get()
    }

    pub fn eggs(&self) -> i64 {
        *self.eggs.get()
    }

    pub fn sauce(&self) -> &Value {
        self.sauce.get()
    }

    pub fn set_buns(&mut self, value: impl Into<Value>) -> RecipeResult<()> {
        assign(&mut self.buns, value)
    }

    pub fn set_cheese(&mut self, value: impl Into<Value>) -> RecipeResult<()> {
        assign(&mut self.cheese, value)
    }

    pub fn set_tomatoes(&mut self, value: impl Into<Value>) -> RecipeResult<()> {
        assign(&mut self.tomatoes, value)
    }

    pub fn set_cutlets(&mut self, value: impl Into<Value>) -> RecipeResult<()> {
        assign(&mut self.cutlets, value)
    }

    pub fn set_eggs(&mut self, value: impl Into<Value>) -> RecipeResult<()> {
        assign(&mut self.eggs, value)
    }

    pub fn set_sauce(&mut self, value: impl Into<Value>) -> RecipeResult<()> {
        assign(&mut self.sauce, value)
    }

    /// Read a field by name.
    pub fn get(&self, name: &str) -> RecipeResult<Value> {
        match name {
            "buns" => Ok(self.buns.to_value()),
            "cheese" => Ok(self.cheese.to_value()),
            "tomatoes" => Ok(self.tomatoes.to_value()),
            "cutlets" => Ok(self.cutlets.to_value()),
            "eggs" => Ok(self.eggs.to_value()),
            "sauce" => Ok(self.sauce.to_value()),
            _ => Err(RecipeError::unknown_field(name)),
        }
    }

    /// Assign a field by name. A rejected value leaves the recipe unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> RecipeResult<()> {
        match name {
            "buns" => self.set_buns(value),
            "cheese" => self.set_cheese(value),
            "tomatoes" => self.set_tomatoes(value),
            "cutlets" => self.set_cutlets(value),
            "eggs" => self.set_eggs(value),
            "sauce" => self.set_sauce(value),
            _ => Err(RecipeError::unknown_field(name)),
        }
    }

    /// Snapshot of the current values.
    pub fn ingredients(&self) -> Ingredients {
        Ingredients {
            buns: self.buns.to_value(),
            cheese: self.cheese.to_value(),
            tomatoes: self.tomatoes.to_value(),
            cutlets: self.cutlets.to_value(),
            eggs: self.eggs.to_value(),
            sauce: self.sauce.to_value(),
        }
    }
}

fn field<V: Validator>(name: &'static str, validator: V, value: Value) -> RecipeResult<Field<V>> {
    Field::new(name, validator, value).map_err(|e| RecipeError::invalid_field(name, e))
}

fn assign<V: Validator>(field: &mut Field<V>, value: impl Into<Value>) -> RecipeResult<()> {
    let name = field.name();
    field
        .set(value)
        .map_err(|e| RecipeError::invalid_field(name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_validator::{ErrorKind, ValidationError};
    use pretty_assertions::assert_eq;

    fn classic() -> BurgerRecipe {
        BurgerRecipe::new(2, 1, 2, 1, 1, "mayo").unwrap()
    }

    #[test]
    fn test_first_failure_follows_assignment_order() {
        // GIVEN - buns and cheese both invalid; cheese is assigned first
        let result = BurgerRecipe::new(5, 9, 2, 1, 1, "mayo");

        // THEN
        let err = result.unwrap_err();
        assert_eq!(err.field(), Some("cheese"));
        assert_eq!(
            err,
            RecipeError::invalid_field("cheese", ValidationError::out_of_range(9, 0, 2))
        );
    }

    #[test]
    fn test_sauce_checked_last() {
        // GIVEN - eggs and sauce both invalid
        let err = BurgerRecipe::new(2, 1, 2, 1, 3, "bbq").unwrap_err();

        // THEN
        assert_eq!(err.field(), Some("eggs"));
    }

    #[test]
    fn test_by_name_access() {
        // GIVEN
        let mut recipe = classic();

        // WHEN
        recipe.set("tomatoes", 3).unwrap();
        recipe.set("sauce", "ketchup").unwrap();

        // THEN
        assert_eq!(recipe.get("tomatoes").unwrap(), Value::Int(3));
        assert_eq!(recipe.get("sauce").unwrap(), Value::from("ketchup"));
        assert_eq!(recipe.tomatoes(), 3);
    }

    #[test]
    fn test_unknown_field() {
        // GIVEN
        let mut recipe = classic();

        // WHEN
        let read = recipe.get("pickles").unwrap_err();
        let write = recipe.set("pickles", 1).unwrap_err();

        // THEN
        assert_eq!(read, RecipeError::unknown_field("pickles"));
        assert_eq!(write.kind(), None);
        assert_eq!(recipe.ingredients(), classic().ingredients());
    }

    #[test]
    fn test_rejected_set_leaves_recipe_unchanged() {
        // GIVEN
        let mut recipe = classic();
        let before = recipe.ingredients();

        // WHEN
        let err = recipe.set_cutlets(0).unwrap_err();

        // THEN
        assert_eq!(err.kind(), Some(ErrorKind::RangeOrMembership));
        assert_eq!(recipe.ingredients(), before);
    }

    #[test]
    fn test_custom_schema() {
        // GIVEN - a schema that allows a bun-less burger with bbq sauce
        let schema = BurgerSchema {
            buns: Number::new(0, 3).unwrap(),
            sauce: OneOf::new(["bbq"]).unwrap(),
            ..BurgerSchema::standard().unwrap()
        };
        let ingredients = Ingredients {
            buns: Value::Int(0),
            cheese: Value::Int(0),
            tomatoes: Value::Int(0),
            cutlets: Value::Int(1),
            eggs: Value::Int(0),
            sauce: Value::from("bbq"),
        };

        // WHEN
        let recipe = BurgerRecipe::with_schema(&schema, ingredients.clone()).unwrap();

        // THEN
        assert_eq!(recipe.ingredients(), ingredients);
        assert!(BurgerRecipe::new(0, 0, 0, 1, 0, "bbq").is_err());
    }
}
