//! Handlers for the coffee-shop menu.
//!
//! `GET /drinks` is public and shows the short recipe form. Everything else
//! requires a bearer token granting the matching scope.

use axum::extract::State;
use axum::response::IntoResponse;
use fsnd_core::drinks::DrinkInput;
use fsnd_core::error::CoreError;
use fsnd_core::types::DbId;
use fsnd_db::models::drink::{DrinkLong, DrinkShort};
use fsnd_db::repositories::DrinkRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::{
    RequireDeleteDrinks, RequireDrinksDetail, RequirePatchDrinks, RequirePostDrinks,
};
use crate::response::Success;
use crate::state::AppState;

#[derive(Serialize)]
struct Menu<T: Serialize> {
    drinks: Vec<T>,
}

#[derive(Serialize)]
struct Deleted {
    delete: DbId,
}

fn not_found(drink_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Drink",
        id: drink_id,
    })
}

/// GET /drinks
///
/// Public menu: colours and proportions only.
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let drinks: Vec<DrinkShort> = DrinkRepo::list(&state.pool)
        .await?
        .iter()
        .map(|d| d.short())
        .collect();

    Ok(Success::json(Menu { drinks }))
}

/// GET /drinks-detail
///
/// Full recipes. Requires `get:drinks-detail`.
pub async fn list_drinks_detail(
    _auth: RequireDrinksDetail,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let drinks: Vec<DrinkLong> = DrinkRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|d| d.long())
        .collect();

    Ok(Success::json(Menu { drinks }))
}

/// POST /drinks
///
/// Requires `post:drinks`. Responds with the new drink in a one-element list.
pub async fn create_drink(
    RequirePostDrinks(user): RequirePostDrinks,
    State(state): State<AppState>,
    AppJson(input): AppJson<DrinkInput>,
) -> AppResult<impl IntoResponse> {
    let drink = input.validate()?;
    let created = DrinkRepo::create(&state.pool, &drink).await?;

    tracing::info!(drink_id = created.id, subject = ?user.subject, "Drink created");

    Ok(Success::json(Menu {
        drinks: vec![created.long()],
    }))
}

/// PATCH /drinks/{id}
///
/// Requires `patch:drinks`. Replaces title and recipe.
pub async fn update_drink(
    RequirePatchDrinks(user): RequirePatchDrinks,
    State(state): State<AppState>,
    AppPath(drink_id): AppPath<DbId>,
    AppJson(input): AppJson<DrinkInput>,
) -> AppResult<impl IntoResponse> {
    let drink = input.validate()?;
    let updated = DrinkRepo::update(&state.pool, drink_id, &drink)
        .await?
        .ok_or_else(|| not_found(drink_id))?;

    tracing::info!(drink_id, subject = ?user.subject, "Drink updated");

    Ok(Success::json(Menu {
        drinks: vec![updated.long()],
    }))
}

/// DELETE /drinks/{id}
///
/// Requires `delete:drinks`.
pub async fn delete_drink(
    RequireDeleteDrinks(user): RequireDeleteDrinks,
    State(state): State<AppState>,
    AppPath(drink_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !DrinkRepo::delete(&state.pool, drink_id).await? {
        return Err(not_found(drink_id));
    }

    tracing::info!(drink_id, subject = ?user.subject, "Drink deleted");

    Ok(Success::json(Deleted { delete: drink_id }))
}
