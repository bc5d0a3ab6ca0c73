//! Route definitions for venues.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venues;
use crate::state::AppState;

/// ```text
/// GET    /venues              -> list_venues
/// POST   /venues/search       -> search_venues
/// POST   /venues/create       -> create_venue
/// GET    /venues/{id}         -> show_venue
/// DELETE /venues/{id}         -> delete_venue
/// GET    /venues/{id}/edit    -> edit_venue_form
/// POST   /venues/{id}/edit    -> update_venue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route("/venues/create", post(venues::create_venue))
        .route(
            "/venues/{id}",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(venues::edit_venue_form).post(venues::update_venue),
        )
}
