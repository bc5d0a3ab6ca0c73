//! Route definitions for the coffee-shop menu.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drinks;
use crate::state::AppState;

/// ```text
/// GET    /drinks          -> list_drinks (public)
/// POST   /drinks          -> create_drink
/// GET    /drinks-detail   -> list_drinks_detail
/// PATCH  /drinks/{id}     -> update_drink
/// DELETE /drinks/{id}     -> delete_drink
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drinks::list_drinks).post(drinks::create_drink))
        .route("/drinks-detail", get(drinks::list_drinks_detail))
        .route(
            "/drinks/{id}",
            patch(drinks::update_drink).delete(drinks::delete_drink),
        )
}
