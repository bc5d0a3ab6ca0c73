use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fsnd_core::error::CoreError;
use fsnd_core::permissions::AuthError;
use fsnd_db::StorageErrorKind;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`AuthError`] and storage errors, and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": <status>, "message": ... }` body every
/// endpoint uses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fsnd_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bearer token or permission check failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request (unparseable body, wrong content type).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed request that cannot be processed.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// No route matched the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path matched but the method did not.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A listing mutation failed in storage. The message is shown to the user.
    #[error("{0}")]
    MutationFailed(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const MSG_BAD_REQUEST: &str = "bad request";
const MSG_NOT_FOUND: &str = "resource not found";
const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
const MSG_UNPROCESSABLE: &str = "unprocessable";
const MSG_INTERNAL: &str = "internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string())
                }
                CoreError::PageNotFound { page } => {
                    tracing::debug!(page, "Requested page is empty");
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string())
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(detail = %msg, "Validation failed");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE.to_string())
                }
                CoreError::InvalidCategory(id) => {
                    tracing::debug!(category_id = id, "Unknown quiz category");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE.to_string())
                }
                CoreError::QuizExhausted { category } => {
                    tracing::debug!(?category, "Quiz pool exhausted");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE.to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
                }
            },

            // --- Authorization ---
            AppError::Auth(err) => {
                tracing::warn!(code = err.code, status = err.status, "Authorization failed");
                let status =
                    StatusCode::from_u16(err.status).unwrap_or(StatusCode::UNAUTHORIZED);
                (status, err.description.clone())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::debug!(detail = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST.to_string())
            }
            AppError::Unprocessable(msg) => {
                tracing::debug!(detail = %msg, "Unprocessable request");
                (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE.to_string())
            }
            AppError::RouteNotFound(path) => {
                tracing::debug!(%path, "No route");
                (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string())
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                MSG_METHOD_NOT_ALLOWED.to_string(),
            ),
            AppError::MutationFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Constraint violations (duplicate title, dangling reference) map to 422.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match StorageErrorKind::classify(err) {
        StorageErrorKind::NotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string()),
        StorageErrorKind::ConstraintViolation => {
            let constraint = match err {
                sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or("unknown"),
                _ => "unknown",
            };
            tracing::warn!(constraint, error = %err, "Constraint violation");
            (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE.to_string())
        }
        StorageErrorKind::Connection => {
            tracing::error!(error = %err, "Database unreachable");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
        StorageErrorKind::Other => {
            tracing::error!(error = %err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Syntactically valid JSON of the wrong shape.
            JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        // `/venues/abc` does not name a resource.
        AppError::RouteNotFound(rejection.body_text())
    }
}
