//! Route definitions for shows.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// ```text
/// GET    /shows          -> list_shows
/// POST   /shows/create   -> create_show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", post(shows::create_show))
}
