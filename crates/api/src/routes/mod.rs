pub mod artists;
pub mod drinks;
pub mod health;
pub mod shows;
pub mod trivia;
pub mod venues;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// The three services share one router; their paths do not overlap.
///
/// ```text
/// /categories                          list (paginated)
/// /categories/{id}/questions           questions in a category (paginated)
/// /questions                           list (paginated); search or create (POST)
/// /questions/{id}                      delete
/// /quizzes                             next quiz question (POST)
///
/// /venues                              grouped by area
/// /venues/search                       search by name (POST)
/// /venues/create                       create (POST)
/// /venues/{id}                         detail, delete
/// /venues/{id}/edit                    edit form, overwrite (POST)
///
/// /artists                             list
/// /artists/search                      search by name (POST)
/// /artists/create                      create (POST)
/// /artists/{id}                        detail, delete
/// /artists/{id}/edit                   edit form, overwrite (POST)
///
/// /shows                               list
/// /shows/create                        create (POST)
///
/// /drinks                              public menu; create (post:drinks)
/// /drinks-detail                       full recipes (get:drinks-detail)
/// /drinks/{id}                         overwrite (patch:drinks), delete (delete:drinks)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(trivia::router())
        .merge(venues::router())
        .merge(artists::router())
        .merge(shows::router())
        .merge(drinks::router())
}
