//! Repository for the `venues` table.

use fsnd_core::listings::VenueForm;
use fsnd_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::show::VenueShow;
use crate::models::venue::{Venue, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website, seeking_talent, seeking_description";

/// Summary projection with the number of shows starting at or after `$1`.
const SUMMARY_SELECT: &str = "\
    SELECT v.id, v.name, v.city, v.state, \
           COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
    FROM venues v \
    LEFT JOIN shows s ON s.venue_id = v.id";

/// Provides CRUD and search for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &VenueForm) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, genres, image_link,
                                 facebook_link, website, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All venues with their upcoming show counts, ordered by area then id.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             GROUP BY v.id
             ORDER BY v.state, v.city, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Venues whose name matches an `ILIKE` pattern, ordered by id.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             WHERE v.name ILIKE $2
             GROUP BY v.id
             ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Every show at a venue, with the performing artist, in start order.
    pub async fn shows(pool: &PgPool, venue_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time ASC, s.id ASC",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Overwrite every field of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VenueForm,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2, city = $3, state = $4, address = $5, phone = $6,
                genres = $7, image_link = $8, facebook_link = $9, website = $10,
                seeking_talent = $11, seeking_description = $12, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a venue. Fails with a foreign-key violation while
    /// shows still reference it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
