//! Repository for the `drinks` table.

use fsnd_core::drinks::NewDrink;
use fsnd_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::drink::Drink;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, recipe";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// All drinks ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id ASC");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Insert a new drink. A duplicate title violates `uq_drinks_title`.
    pub async fn create(pool: &PgPool, input: &NewDrink) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(&input.title)
            .bind(Json(&input.recipe))
            .fetch_one(pool)
            .await
    }

    /// Overwrite title and recipe.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewDrink,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET title = $2, recipe = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(Json(&input.recipe))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a drink. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
