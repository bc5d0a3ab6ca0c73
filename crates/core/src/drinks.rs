//! Drink recipes and their public/detailed representations.
//!
//! The public menu only shows the colour and proportion of each layer
//! (the "short" form); the full recipe with ingredient names is reserved for
//! staff holding the `get:drinks-detail` permission (the "long" form).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One layer of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Public view of an ingredient: no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

impl From<&Ingredient> for ShortIngredient {
    fn from(i: &Ingredient) -> Self {
        Self {
            color: i.color.clone(),
            parts: i.parts,
        }
    }
}

/// Short form of a full recipe.
pub fn short_recipe(recipe: &[Ingredient]) -> Vec<ShortIngredient> {
    recipe.iter().map(ShortIngredient::from).collect()
}

/// Clients send either a single ingredient or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_vec(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(v) => v,
            RecipeInput::One(i) => vec![i],
        }
    }
}

/// Body of `POST /drinks` and `PATCH /drinks/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DrinkInput {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

/// A validated drink ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl DrinkInput {
    /// Validate a submission. Title is mandatory; so is a non-empty recipe
    /// whose layers each have a name, a colour and at least one part.
    pub fn validate(self) -> Result<NewDrink, CoreError> {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => return Err(CoreError::Validation("title is required".into())),
        };

        let recipe = self
            .recipe
            .map(RecipeInput::into_vec)
            .unwrap_or_default();
        if recipe.is_empty() {
            return Err(CoreError::Validation("recipe is required".into()));
        }
        for ingredient in &recipe {
            validate_ingredient(ingredient)?;
        }

        Ok(NewDrink { title, recipe })
    }
}

fn validate_ingredient(ingredient: &Ingredient) -> Result<(), CoreError> {
    if ingredient.name.trim().is_empty() {
        return Err(CoreError::Validation("ingredient name is required".into()));
    }
    if ingredient.color.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "ingredient '{}' needs a color",
            ingredient.name
        )));
    }
    if ingredient.parts == 0 {
        return Err(CoreError::Validation(format!(
            "ingredient '{}' needs at least one part",
            ingredient.name
        )));
    }
    Ok(())
}
