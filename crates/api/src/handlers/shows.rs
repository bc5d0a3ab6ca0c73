//! Handlers for shows.

use axum::extract::State;
use axum::response::IntoResponse;
use fsnd_db::models::show::{CreateShow, ShowListing};
use fsnd_db::repositories::ShowRepo;
use serde::Serialize;

use super::mutation_failed;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{Mutation, Success};
use crate::state::AppState;

#[derive(Serialize)]
struct Shows {
    shows: Vec<ShowListing>,
}

/// GET /shows
///
/// Every show, soonest first, with venue and artist names.
pub async fn list_shows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shows = ShowRepo::list(&state.pool).await?;

    Ok(Success::json(Shows { shows }))
}

/// POST /shows/create
///
/// An unknown venue or artist fails the insert and is reported generically.
pub async fn create_show(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateShow>,
) -> AppResult<impl IntoResponse> {
    let show = ShowRepo::create(&state.pool, &input)
        .await
        .map_err(|e| mutation_failed(e, "An error occurred. Show could not be listed.".into()))?;

    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show listed"
    );

    Ok(Success::json(Mutation {
        message: "Show was successfully listed!".into(),
        id: show.id,
    }))
}
