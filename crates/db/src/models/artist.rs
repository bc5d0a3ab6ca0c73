//! Artists and their read-side projections.

use fsnd_core::listings::ArtistForm;
use fsnd_core::shows::partition_shows;
use fsnd_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::show::ArtistShow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    /// The artist as an edit form would be prefilled.
    pub fn to_form(&self) -> ArtistForm {
        ArtistForm {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website: self.website.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Id and name only, for the artist index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
}

/// Artist search hit with its upcoming show count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// An artist together with their shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<ArtistShow>, now: Timestamp) -> Self {
        let (past_shows, upcoming_shows) = partition_shows(shows, now);
        Self {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
