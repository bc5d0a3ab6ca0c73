//! Handlers for artists. Mirrors the venue handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use fsnd_core::error::CoreError;
use fsnd_core::listings::{ArtistForm, NameSearch};
use fsnd_core::types::DbId;
use fsnd_db::models::artist::{Artist, ArtistDetail, ArtistSearchHit, ArtistSummary};
use fsnd_db::repositories::ArtistRepo;
use serde::Serialize;

use super::mutation_failed;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Mutation, Success};
use crate::state::AppState;

#[derive(Serialize)]
struct Artists {
    artists: Vec<ArtistSummary>,
}

#[derive(Serialize)]
struct SearchResults {
    count: usize,
    data: Vec<ArtistSearchHit>,
    search_term: String,
}

#[derive(Serialize)]
struct One {
    artist: ArtistDetail,
}

#[derive(Serialize)]
struct EditForm {
    id: DbId,
    artist: ArtistForm,
}

async fn find(state: &AppState, artist_id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(&state.pool, artist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }))
}

/// GET /artists
///
/// Id and name of every artist.
pub async fn list_artists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artists = ArtistRepo::list_summaries(&state.pool).await?;

    Ok(Success::json(Artists { artists }))
}

/// POST /artists/search
///
/// Case-insensitive substring match on artist name.
pub async fn search_artists(
    State(state): State<AppState>,
    AppJson(search): AppJson<NameSearch>,
) -> AppResult<impl IntoResponse> {
    let data = ArtistRepo::search(&state.pool, &search.pattern(), Utc::now()).await?;

    Ok(Success::json(SearchResults {
        count: data.len(),
        data,
        search_term: search.search_term,
    }))
}

/// GET /artists/{id}
///
/// The artist with their shows split into past and upcoming.
pub async fn show_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = find(&state, artist_id).await?;
    let shows = ArtistRepo::shows(&state.pool, artist_id).await?;

    Ok(Success::json(One {
        artist: ArtistDetail::new(artist, shows, Utc::now()),
    }))
}

/// GET /artists/{id}/edit
///
/// Current values for prefilling the edit form.
pub async fn edit_artist_form(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = find(&state, artist_id).await?;

    Ok(Success::json(EditForm {
        id: artist.id,
        artist: artist.to_form(),
    }))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    AppJson(form): AppJson<ArtistForm>,
) -> AppResult<impl IntoResponse> {
    let form = form.clean()?;

    let artist = ArtistRepo::create(&state.pool, &form).await.map_err(|e| {
        mutation_failed(
            e,
            format!("An error occurred. Artist {} could not be created.", form.name),
        )
    })?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");

    Ok(Success::json(Mutation {
        message: format!("Artist {} was successfully created!", artist.name),
        id: artist.id,
    }))
}

/// POST /artists/{id}/edit
///
/// Overwrites every field with the submitted values.
pub async fn update_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
    AppJson(form): AppJson<ArtistForm>,
) -> AppResult<impl IntoResponse> {
    let form = form.clean()?;

    let artist = ArtistRepo::update(&state.pool, artist_id, &form)
        .await
        .map_err(|e| {
            mutation_failed(
                e,
                format!("An error occurred. Artist {} could not be updated.", form.name),
            )
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }))?;

    tracing::info!(artist_id, "Artist updated");

    Ok(Success::json(Mutation {
        message: format!("Artist {} was successfully updated!", artist.name),
        id: artist.id,
    }))
}

/// DELETE /artists/{id}
pub async fn delete_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = find(&state, artist_id).await?;

    let deleted = ArtistRepo::delete(&state.pool, artist_id).await.map_err(|e| {
        mutation_failed(
            e,
            format!("An error occurred. Artist {} could not be deleted.", artist.name),
        )
    })?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: artist_id,
        }));
    }

    tracing::info!(artist_id, "Artist deleted");

    Ok(Success::json(Mutation {
        message: format!("Artist {} was successfully deleted!", artist.name),
        id: artist_id,
    }))
}
