//! Handlers for the place resource.
//!
//! Each handler owns one [`DbSession`] for the duration of the request and
//! makes exactly one repository call.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use places_core::error::CoreError;
use places_core::place::ENTITY_NAME;
use places_core::types::DbId;
use places_db::models::place::{CreatePlace, Place, PlaceUpdate};
use places_db::repositories::PlaceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::session::DbSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    })
}

/// POST /places/
pub async fn create(
    mut session: DbSession,
    payload: Result<Json<CreatePlace>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Place>)> {
    let Json(input) = payload?;
    input.validate()?;

    let place = PlaceRepo::create(&mut *session, &input).await?;
    tracing::info!(id = place.id, name = %place.name, "Place created");
    Ok((StatusCode::CREATED, Json(place)))
}

/// GET /places/
pub async fn list(mut session: DbSession) -> AppResult<Json<Vec<Place>>> {
    let places = PlaceRepo::list(&mut *session).await?;
    Ok(Json(places))
}

/// GET /place/{place_id}
///
/// An unknown id yields `null` rather than 404.
pub async fn get_by_id(
    mut session: DbSession,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Option<Place>>> {
    let Path(id) = path?;
    let place = PlaceRepo::find_by_id(&mut *session, id).await?;
    Ok(Json(place))
}

/// PUT /place/update
pub async fn update(
    State(state): State<AppState>,
    mut session: DbSession,
    payload: Result<Json<PlaceUpdate>, JsonRejection>,
) -> AppResult<Json<Place>> {
    let Json(input) = payload?;
    let id = input.id;
    let policy = state.config.update_policy;

    let changes = input.resolve(policy)?;
    if changes.is_empty() {
        tracing::debug!(id, %policy, "Update carries no applicable fields");
    }

    let place = PlaceRepo::update(&mut *session, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, %policy, "Place updated");
    Ok(Json(place))
}

/// DELETE /place/{place_id}/delete
pub async fn delete(
    mut session: DbSession,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Place>> {
    let Path(id) = path?;
    let place = PlaceRepo::delete(&mut *session, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Place deleted");
    Ok(Json(place))
}
