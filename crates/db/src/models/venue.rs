//! Venues and their read-side projections.

use fsnd_core::listings::{Located, VenueForm};
use fsnd_core::shows::partition_shows;
use fsnd_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::show::VenueShow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// The venue as an edit form would be prefilled.
    pub fn to_form(&self) -> VenueForm {
        VenueForm {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website: self.website.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Venue summary used by the area listing and by search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub city: String,
    #[serde(skip_serializing)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Located for VenueSummary {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// A venue together with its shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<VenueShow>, now: Timestamp) -> Self {
        let (past_shows, upcoming_shows) = partition_shows(shows, now);
        Self {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
