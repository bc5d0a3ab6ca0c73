//! Shared response envelope for API handlers.
//!
//! Successful responses are a flat JSON object with `"success": true` next to
//! the payload fields. Use [`Success`] instead of ad-hoc `json!` bodies.

use axum::Json;
use serde::Serialize;

/// `{ "success": true, ...T }` response envelope.
///
/// `T` must serialize as a JSON object; its fields are flattened in.
///
/// ```ignore
/// Ok(Success::json(DrinksBody { drinks }))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Success<T> {
    pub fn json(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Acknowledgement of a listing mutation (`{success, message, id}`).
#[derive(Debug, Serialize)]
pub struct Mutation {
    pub message: String,
    pub id: fsnd_core::types::DbId,
}
