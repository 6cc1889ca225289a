//! Route definitions for the place resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::place;
use crate::state::AppState;

/// Place routes, mounted at the root.
///
/// ```text
/// GET    /places/                 -> list
/// POST   /places/                 -> create
/// GET    /place/{place_id}        -> get_by_id
/// PUT    /place/update            -> update
/// DELETE /place/{place_id}/delete -> delete
/// ```
///
/// The collection is also reachable without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/places", get(place::list).post(place::create))
        .route("/places/", get(place::list).post(place::create))
        .route("/place/update", put(place::update))
        .route("/place/{place_id}", get(place::get_by_id))
        .route("/place/{place_id}/delete", delete(place::delete))
}
