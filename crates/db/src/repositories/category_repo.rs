//! Repository for the `categories` table.

use fsnd_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Read-only access to trivia categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Whether a category with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
