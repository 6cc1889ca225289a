//! Request-scoped database session extractor.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use crate::error::AppError;
use crate::state::AppState;

/// One pooled connection bound to the lifetime of a single request.
///
/// Acquired when the handler's extractors run and returned to the pool when
/// the value is dropped, whichever way the handler exits (success, error,
/// rejected body, timeout or panic unwind).
///
/// ```ignore
/// async fn my_handler(mut session: DbSession) -> AppResult<Json<Vec<Place>>> {
///     let places = PlaceRepo::list(&mut *session).await?;
///     Ok(Json(places))
/// }
/// ```
pub struct DbSession(PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        tracing::trace!("Database session acquired");
        Ok(DbSession(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        // The inner `PoolConnection` returns itself to the pool on drop.
        tracing::trace!("Database session released");
    }
}
