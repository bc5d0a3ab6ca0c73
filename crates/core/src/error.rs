use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Page {page} is empty")]
    PageNotFound { page: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(DbId),

    #[error("No questions left to play in category {category:?}")]
    QuizExhausted { category: Option<DbId> },

    #[error("Internal error: {0}")]
    Internal(String),
}
