//! Route definitions for the trivia API.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trivia;
use crate::state::AppState;

/// ```text
/// GET    /categories                 -> list_categories
/// GET    /categories/{id}/questions  -> category_questions
/// GET    /questions                  -> list_questions
/// POST   /questions                  -> submit_question
/// DELETE /questions/{id}             -> delete_question
/// POST   /quizzes                    -> next_quiz_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(trivia::list_categories))
        .route("/categories/{id}/questions", get(trivia::category_questions))
        .route(
            "/questions",
            get(trivia::list_questions).post(trivia::submit_question),
        )
        .route("/questions/{id}", delete(trivia::delete_question))
        .route("/quizzes", post(trivia::next_quiz_question))
}
