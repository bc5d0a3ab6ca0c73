//! Handlers for venues.
//!
//! Mutations report success or failure with a user-facing message naming the
//! venue. Storage failures (including deleting a venue that still has shows)
//! are reported generically.

use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use fsnd_core::error::CoreError;
use fsnd_core::listings::{group_by_area, Area, NameSearch, VenueForm};
use fsnd_core::types::DbId;
use fsnd_db::models::venue::{Venue, VenueDetail, VenueSummary};
use fsnd_db::repositories::VenueRepo;
use serde::Serialize;

use super::mutation_failed;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Mutation, Success};
use crate::state::AppState;

#[derive(Serialize)]
struct Areas {
    areas: Vec<Area<VenueSummary>>,
}

#[derive(Serialize)]
struct SearchResults {
    count: usize,
    data: Vec<VenueSummary>,
    search_term: String,
}

#[derive(Serialize)]
struct One {
    venue: VenueDetail,
}

#[derive(Serialize)]
struct EditForm {
    id: DbId,
    venue: VenueForm,
}

async fn find(state: &AppState, venue_id: DbId) -> AppResult<Venue> {
    VenueRepo::find_by_id(&state.pool, venue_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id: venue_id,
        }))
}

/// GET /venues
///
/// Every venue grouped by city and state, with its upcoming show count.
pub async fn list_venues(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let venues = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;

    Ok(Success::json(Areas {
        areas: group_by_area(venues),
    }))
}

/// POST /venues/search
///
/// Case-insensitive substring match on venue name.
pub async fn search_venues(
    State(state): State<AppState>,
    AppJson(search): AppJson<NameSearch>,
) -> AppResult<impl IntoResponse> {
    let data = VenueRepo::search(&state.pool, &search.pattern(), Utc::now()).await?;

    Ok(Success::json(SearchResults {
        count: data.len(),
        data,
        search_term: search.search_term,
    }))
}

/// GET /venues/{id}
///
/// The venue with its shows split into past and upcoming.
pub async fn show_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let venue = find(&state, venue_id).await?;
    let shows = VenueRepo::shows(&state.pool, venue_id).await?;

    Ok(Success::json(One {
        venue: VenueDetail::new(venue, shows, Utc::now()),
    }))
}

/// GET /venues/{id}/edit
///
/// Current values for prefilling the edit form.
pub async fn edit_venue_form(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let venue = find(&state, venue_id).await?;

    Ok(Success::json(EditForm {
        id: venue.id,
        venue: venue.to_form(),
    }))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    AppJson(form): AppJson<VenueForm>,
) -> AppResult<impl IntoResponse> {
    let form = form.clean()?;

    let venue = VenueRepo::create(&state.pool, &form).await.map_err(|e| {
        mutation_failed(
            e,
            format!("An error occurred. Venue {} could not be created.", form.name),
        )
    })?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");

    Ok(Success::json(Mutation {
        message: format!("Venue {} was successfully created!", venue.name),
        id: venue.id,
    }))
}

/// POST /venues/{id}/edit
///
/// Overwrites every field with the submitted values.
pub async fn update_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
    AppJson(form): AppJson<VenueForm>,
) -> AppResult<impl IntoResponse> {
    let form = form.clean()?;

    let venue = VenueRepo::update(&state.pool, venue_id, &form)
        .await
        .map_err(|e| {
            mutation_failed(
                e,
                format!("An error occurred. Venue {} could not be updated.", form.name),
            )
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id: venue_id,
        }))?;

    tracing::info!(venue_id, "Venue updated");

    Ok(Success::json(Mutation {
        message: format!("Venue {} was successfully updated!", venue.name),
        id: venue.id,
    }))
}

/// DELETE /venues/{id}
pub async fn delete_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let venue = find(&state, venue_id).await?;

    let deleted = VenueRepo::delete(&state.pool, venue_id).await.map_err(|e| {
        mutation_failed(
            e,
            format!("An error occurred. Venue {} could not be deleted.", venue.name),
        )
    })?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id: venue_id,
        }));
    }

    tracing::info!(venue_id, "Venue deleted");

    Ok(Success::json(Mutation {
        message: format!("Venue {} was successfully deleted!", venue.name),
        id: venue_id,
    }))
}
