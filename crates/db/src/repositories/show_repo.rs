//! Repository for the `shows` table.

use sqlx::PgPool;

use crate::models::show::{CreateShow, ShowListing};

/// Provides create and list for shows. Shows are never updated.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show. Unknown venue or artist ids fail with a
    /// foreign-key violation. Returns the listing row for the new show.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<ShowListing, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(input.start_time)
        .fetch_one(&mut *tx)
        .await?;

        let listing = sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id,
                    a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             WHERE s.id = $1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(listing)
    }

    /// All shows ordered by start time.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id,
                    a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
