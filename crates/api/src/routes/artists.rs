//! Route definitions for artists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// ```text
/// GET    /artists              -> list_artists
/// POST   /artists/search       -> search_artists
/// POST   /artists/create       -> create_artist
/// GET    /artists/{id}         -> show_artist
/// DELETE /artists/{id}         -> delete_artist
/// GET    /artists/{id}/edit    -> edit_artist_form
/// POST   /artists/{id}/edit    -> update_artist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route("/artists/create", post(artists::create_artist))
        .route(
            "/artists/{id}",
            get(artists::show_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/{id}/edit",
            get(artists::edit_artist_form).post(artists::update_artist),
        )
}
