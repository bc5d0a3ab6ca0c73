//! Permission-scope extractors for the drinks endpoints.
//!
//! Each extractor wraps [`StaffUser`] and rejects requests whose token does
//! not grant the scope. A token without a `permissions` claim is a 400;
//! a missing scope is a 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fsnd_core::permissions::{check_permission, Permission};

use super::auth::StaffUser;
use crate::error::AppError;
use crate::state::AppState;

async fn require(
    parts: &mut Parts,
    state: &AppState,
    permission: Permission,
) -> Result<StaffUser, AppError> {
    let user = StaffUser::from_request_parts(parts, state).await?;
    check_permission(user.permissions.as_deref(), permission)?;
    Ok(user)
}

/// Requires `get:drinks-detail`.
///
/// ```ignore
/// async fn detail(RequireDrinksDetail(user): RequireDrinksDetail) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireDrinksDetail(pub StaffUser);

impl FromRequestParts<AppState> for RequireDrinksDetail {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require(parts, state, Permission::GetDrinksDetail)
            .await
            .map(RequireDrinksDetail)
    }
}

/// Requires `post:drinks`.
pub struct RequirePostDrinks(pub StaffUser);

impl FromRequestParts<AppState> for RequirePostDrinks {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require(parts, state, Permission::PostDrinks)
            .await
            .map(RequirePostDrinks)
    }
}

/// Requires `patch:drinks`.
pub struct RequirePatchDrinks(pub StaffUser);

impl FromRequestParts<AppState> for RequirePatchDrinks {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require(parts, state, Permission::PatchDrinks)
            .await
            .map(RequirePatchDrinks)
    }
}

/// Requires `delete:drinks`.
pub struct RequireDeleteDrinks(pub StaffUser);

impl FromRequestParts<AppState> for RequireDeleteDrinks {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require(parts, state, Permission::DeleteDrinks)
            .await
            .map(RequireDeleteDrinks)
    }
}
