use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers borrow from it through
    /// [`DbSession`](crate::middleware::session::DbSession).
    pub pool: places_db::DbPool,
    /// Server configuration (update policy, timeouts).
    pub config: Arc<ServerConfig>,
}
