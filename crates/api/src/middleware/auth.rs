//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use fsnd_core::permissions::{bearer_token, AuthError};

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Staff member extracted from a JWT Bearer token in the `Authorization` header.
///
/// Only authenticates; use the [`rbac`](super::rbac) extractors to require a
/// specific scope.
#[derive(Debug, Clone)]
pub struct StaffUser {
    /// The identity-provider subject, if the token carries one.
    pub subject: Option<String>,
    /// The `permissions` claim, `None` if the token has no such claim.
    pub permissions: Option<Vec<String>>,
}

impl FromRequestParts<AppState> for StaffUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(AuthError::header_missing)?
            .to_str()
            .map_err(|_| AuthError::invalid_header("Authorization header is not valid ASCII."))?;

        let token = bearer_token(header)?;
        let claims = validate_token(token, &state.config.auth)?;

        Ok(StaffUser {
            subject: claims.sub,
            permissions: claims.permissions,
        })
    }
}
