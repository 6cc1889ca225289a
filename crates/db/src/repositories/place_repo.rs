//! Repository for the `places` table.
//!
//! Every function takes any SQLite executor: the request-scoped connection
//! in the API, or the pool directly in tests. Each call is one statement.

use places_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;

use crate::models::place::{CreatePlace, Place, PlaceChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, coffee, wifi, food";

/// Provides CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place, returning the created row with its assigned id.
    ///
    /// Any `id` on the input is ignored.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreatePlace,
    ) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (name, description, coffee, wifi, food) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.coffee)
            .bind(input.wifi)
            .bind(input.food)
            .fetch_one(executor)
            .await
    }

    /// Find a place by its id.
    pub async fn find_by_id<'e>(
        executor: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = ?");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all places in id order.
    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places ORDER BY id");
        sqlx::query_as::<_, Place>(&query)
            .fetch_all(executor)
            .await
    }

    /// Apply resolved changes to an existing place. Only `Some` fields are
    /// written; `description: Some(None)` sets the column to NULL.
    ///
    /// Returns `None` if no row with `changes.id` exists.
    pub async fn update<'e>(
        executor: impl SqliteExecutor<'e>,
        changes: &PlaceChanges,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET \
                name = COALESCE(?, name), \
                description = CASE WHEN ? THEN ? ELSE description END, \
                coffee = COALESCE(?, coffee), \
                wifi = COALESCE(?, wifi), \
                food = COALESCE(?, food) \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let description = changes.description.as_ref();
        sqlx::query_as::<_, Place>(&query)
            .bind(&changes.name)
            .bind(description.is_some())
            .bind(description.and_then(|d| d.as_deref()))
            .bind(changes.coffee)
            .bind(changes.wifi)
            .bind(changes.food)
            .bind(changes.id)
            .fetch_optional(executor)
            .await
    }

    /// Delete a place, returning the row as it was before deletion.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete<'e>(
        executor: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("DELETE FROM places WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
