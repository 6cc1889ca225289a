pub mod health;
pub mod index;
pub mod place;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                          informational marker
/// /docs                      route index
/// /health                    service and database health
///
/// /places/                   list, create
/// /place/{place_id}          get
/// /place/update              partial update (PUT)
/// /place/{place_id}/delete   delete (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .merge(place::router())
}
