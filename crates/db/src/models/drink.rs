//! Coffee-shop drinks.

use fsnd_core::drinks::{short_recipe, Ingredient, ShortIngredient};
use fsnd_core::types::DbId;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `drinks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<Ingredient>>,
}

/// Public menu representation.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

/// Staff representation with ingredient names.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: short_recipe(&self.recipe.0),
        }
    }

    pub fn long(self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title,
            recipe: self.recipe.0,
        }
    }
}
