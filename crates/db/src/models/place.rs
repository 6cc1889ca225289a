//! Place entity model and DTOs.

use places_core::error::CoreError;
use places_core::place::{validate_place_name, UpdatePolicy};
use places_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `places` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub coffee: bool,
    pub wifi: bool,
    pub food: bool,
}

/// DTO for creating a new place.
///
/// Clients send the full record shape; `id` is accepted but ignored since
/// storage assigns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub coffee: bool,
    pub wifi: bool,
    pub food: bool,
}

impl CreatePlace {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_place_name(&self.name)
    }
}

/// DTO for a partial update. `id` selects the row; every other field is
/// optional.
///
/// `description` distinguishes an omitted key (`None`) from an explicit
/// `null` (`Some(None)`), which only matters under
/// [`UpdatePolicy::Explicit`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceUpdate {
    pub id: DbId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub coffee: Option<bool>,
    #[serde(default)]
    pub wifi: Option<bool>,
    #[serde(default)]
    pub food: Option<bool>,
}

impl PlaceUpdate {
    /// Resolve the request into the set of columns to write.
    ///
    /// Fails if a supplied name breaks the length limit.
    pub fn resolve(self, policy: UpdatePolicy) -> Result<PlaceChanges, CoreError> {
        let changes = PlaceChanges {
            id: self.id,
            name: policy.apply(self.name),
            description: policy.apply_nullable(self.description),
            coffee: policy.apply(self.coffee),
            wifi: policy.apply(self.wifi),
            food: policy.apply(self.food),
        };
        if let Some(name) = &changes.name {
            validate_place_name(name)?;
        }
        Ok(changes)
    }
}

/// Columns to overwrite on an existing place. `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceChanges {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub coffee: Option<bool>,
    pub wifi: Option<bool>,
    pub food: Option<bool>,
}

impl PlaceChanges {
    /// True when nothing would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.coffee.is_none()
            && self.wifi.is_none()
            && self.food.is_none()
    }
}

/// Wrap any present value (including `null`) in `Some`, so a missing key
/// falls back to the field default of `None`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn parse_update(value: serde_json::Value) -> PlaceUpdate {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn update_distinguishes_missing_and_null_description() {
        let omitted = parse_update(json!({"id": 1}));
        assert_eq!(omitted.description, None);

        let nulled = parse_update(json!({"id": 1, "description": null}));
        assert_eq!(nulled.description, Some(None));

        let set = parse_update(json!({"id": 1, "description": "cozy"}));
        assert_eq!(set.description, Some(Some("cozy".to_string())));
    }

    #[test]
    fn update_requires_id() {
        let result = serde_json::from_value::<PlaceUpdate>(json!({"name": "Cafe"}));
        assert!(result.is_err());
    }

    #[test]
    fn truthy_resolution_ignores_falsy_values() {
        let update = parse_update(json!({
            "id": 3,
            "name": "",
            "description": null,
            "coffee": false,
            "wifi": true
        }));
        let changes = update.resolve(UpdatePolicy::Truthy).unwrap();

        assert_eq!(
            changes,
            PlaceChanges {
                id: 3,
                wifi: Some(true),
                ..Default::default()
            }
        );
    }

    #[test]
    fn explicit_resolution_keeps_falsy_values() {
        let update = parse_update(json!({
            "id": 3,
            "description": null,
            "coffee": false
        }));
        let changes = update.resolve(UpdatePolicy::Explicit).unwrap();

        assert_eq!(changes.description, Some(None));
        assert_eq!(changes.coffee, Some(false));
        assert_eq!(changes.name, None);
        assert!(!changes.is_empty());
    }

    #[test]
    fn resolution_rejects_long_name() {
        let update = PlaceUpdate {
            id: 1,
            name: Some("n".repeat(51)),
            ..Default::default()
        };
        assert_matches!(
            update.resolve(UpdatePolicy::Truthy),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn id_only_update_is_empty() {
        let changes = parse_update(json!({"id": 9}))
            .resolve(UpdatePolicy::Explicit)
            .unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn create_ignores_supplied_id_and_defaults_description() {
        let input: CreatePlace = serde_json::from_value(json!({
            "id": 42,
            "name": "Cafe A",
            "coffee": true,
            "wifi": false,
            "food": false
        }))
        .unwrap();

        assert_eq!(input.id, Some(42));
        assert_eq!(input.description, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_requires_amenity_flags() {
        let result = serde_json::from_value::<CreatePlace>(json!({
            "name": "Cafe A",
            "coffee": true
        }));
        assert!(result.is_err());
    }
}
