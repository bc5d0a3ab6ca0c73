use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once in `main`.
    pub pool: fsnd_db::DbPool,
    /// Server configuration (token validation settings live here).
    pub config: Arc<ServerConfig>,
}
