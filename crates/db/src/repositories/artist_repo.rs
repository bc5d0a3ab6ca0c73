//! Repository for the `artists` table.

use fsnd_core::listings::ArtistForm;
use fsnd_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistSearchHit, ArtistSummary};
use crate::models::show::ArtistShow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, city, state, phone, genres, image_link, \
    facebook_link, website, seeking_venue, seeking_description";

/// Provides CRUD and search for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &ArtistForm) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link,
                                  facebook_link, website, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Id and name of every artist, ordered by id.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Artists whose name matches an `ILIKE` pattern, ordered by id.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSearchHit>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSearchHit>(
            "SELECT a.id, a.name,
                    COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
             FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE a.name ILIKE $2
             GROUP BY a.id
             ORDER BY a.id",
        )
        .bind(now)
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Every show by an artist, with the hosting venue, in start order.
    pub async fn shows(pool: &PgPool, artist_id: DbId) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Overwrite every field of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArtistForm,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2, city = $3, state = $4, phone = $5, genres = $6,
                image_link = $7, facebook_link = $8, website = $9,
                seeking_venue = $10, seeking_description = $11, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an artist. Fails with a foreign-key violation while
    /// shows still reference them. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
