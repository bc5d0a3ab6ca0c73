//! Venue and artist listing forms, validation, and area grouping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::trivia::substring_pattern;

/// Submission for creating or editing a venue. Editing overwrites every
/// field with the submitted values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "state is required"))]
    pub state: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    #[validate(url)]
    pub image_link: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

/// Submission for creating or editing an artist. Editing overwrites every
/// field with the submitted values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "state is required"))]
    pub state: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    #[validate(url)]
    pub image_link: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Trim every field, turn blank optionals into `None`, and validate.
    pub fn clean(self) -> Result<Self, CoreError> {
        let form = Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: blank_to_none(self.address),
            phone: blank_to_none(self.phone),
            genres: normalize_genres(self.genres),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website: blank_to_none(self.website),
            seeking_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        };
        form.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(form)
    }
}

impl ArtistForm {
    /// Trim every field, turn blank optionals into `None`, and validate.
    pub fn clean(self) -> Result<Self, CoreError> {
        let form = Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: blank_to_none(self.phone),
            genres: normalize_genres(self.genres),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website: blank_to_none(self.website),
            seeking_venue: self.seeking_venue,
            seeking_description: blank_to_none(self.seeking_description),
        };
        form.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(form)
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trim genres, drop blanks, and drop repeats while keeping first-seen order.
pub fn normalize_genres(genres: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let genre = genre.trim();
        if !genre.is_empty() && !out.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
            out.push(genre.to_string());
        }
    }
    out
}

/// Body of `POST /venues/search` and `POST /artists/search`.
///
/// A blank term matches every name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameSearch {
    #[serde(default)]
    pub search_term: String,
}

impl NameSearch {
    /// `ILIKE` pattern matching the trimmed term anywhere in a name.
    pub fn pattern(&self) -> String {
        substring_pattern(self.search_term.trim())
    }
}

/// Something listed under a city/state area.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// Venues grouped under one city/state pair.
#[derive(Debug, Clone, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by `(city, state)`, keeping areas and their members in the
/// order they first appear.
pub fn group_by_area<T: Located>(items: Vec<T>) -> Vec<Area<T>> {
    let mut areas: Vec<Area<T>> = Vec::new();
    for item in items {
        match areas
            .iter_mut()
            .find(|a| a.city == item.city() && a.state == item.state())
        {
            Some(area) => area.venues.push(item),
            None => areas.push(Area {
                city: item.city().to_string(),
                state: item.state().to_string(),
                venues: vec![item],
            }),
        }
    }
    areas
}
