//! Place domain rules: name validation and the partial-update policy.
//!
//! The update policy decides which fields of a partial update count as
//! "supplied". The storage layer resolves an update DTO through
//! [`UpdatePolicy::apply`] / [`UpdatePolicy::apply_nullable`] before
//! writing anything.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::error::CoreError;

/// Maximum length of a place name, in characters.
pub const MAX_PLACE_NAME_LEN: usize = 50;

/// Entity name used in [`CoreError::NotFound`] for places.
pub const ENTITY_NAME: &str = "Place";

/// Validate a place name against the column limit.
///
/// Length is counted in characters, not bytes, so multi-byte names are
/// not penalised.
pub fn validate_place_name(name: &str) -> Result<(), CoreError> {
    if !name.validate_length(None, Some(MAX_PLACE_NAME_LEN as u64), None) {
        return Err(CoreError::Validation(format!(
            "Place name too long: {} chars (max {MAX_PLACE_NAME_LEN})",
            name.chars().count()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Truthiness
// ---------------------------------------------------------------------------

/// Values that have a "falsy" state which the truthy policy treats as
/// "not supplied".
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

// ---------------------------------------------------------------------------
// Update policy
// ---------------------------------------------------------------------------

/// How a partial update decides whether a field was supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Only truthy values are applied. `false`, `""` and `null` leave the
    /// stored value untouched, so a flag can never be cleared this way.
    #[default]
    Truthy,
    /// Every value present in the request is applied, including `false`
    /// and `""`. An explicit `null` clears a nullable column.
    Explicit,
}

impl UpdatePolicy {
    /// Resolve a non-nullable field. `None` means "leave unchanged".
    pub fn apply<T: Truthy>(self, value: Option<T>) -> Option<T> {
        match self {
            UpdatePolicy::Truthy => value.filter(Truthy::is_truthy),
            UpdatePolicy::Explicit => value,
        }
    }

    /// Resolve a nullable field.
    ///
    /// The outer `Option` is presence in the request; the inner one is the
    /// column value. `None` means "leave unchanged", `Some(None)` means
    /// "set to NULL".
    pub fn apply_nullable<T: Truthy>(self, value: Option<Option<T>>) -> Option<Option<T>> {
        match self {
            UpdatePolicy::Truthy => match value {
                Some(Some(v)) if v.is_truthy() => Some(Some(v)),
                _ => None,
            },
            UpdatePolicy::Explicit => value,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpdatePolicy::Truthy => "truthy",
            UpdatePolicy::Explicit => "explicit",
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdatePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truthy" => Ok(UpdatePolicy::Truthy),
            "explicit" => Ok(UpdatePolicy::Explicit),
            other => Err(CoreError::Validation(format!(
                "Invalid update policy '{other}'. Must be one of: truthy, explicit"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // --- Name validation ---

    #[test]
    fn validate_place_name_accepts_valid() {
        assert!(validate_place_name("Cafe A").is_ok());
    }

    #[test]
    fn validate_place_name_accepts_empty() {
        assert!(validate_place_name("").is_ok());
    }

    #[test]
    fn validate_place_name_accepts_exact_limit() {
        let name = "x".repeat(MAX_PLACE_NAME_LEN);
        assert!(validate_place_name(&name).is_ok());
    }

    #[test]
    fn validate_place_name_rejects_too_long() {
        let name = "x".repeat(MAX_PLACE_NAME_LEN + 1);
        let err = validate_place_name(&name).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn validate_place_name_counts_chars_not_bytes() {
        // 50 two-byte characters are 100 bytes but still within the limit.
        let name = "é".repeat(MAX_PLACE_NAME_LEN);
        assert!(validate_place_name(&name).is_ok());
    }

    // --- Truthy policy ---

    #[test]
    fn truthy_policy_drops_false() {
        assert_eq!(UpdatePolicy::Truthy.apply(Some(false)), None);
        assert_eq!(UpdatePolicy::Truthy.apply(Some(true)), Some(true));
    }

    #[test]
    fn truthy_policy_drops_empty_string() {
        assert_eq!(UpdatePolicy::Truthy.apply(Some(String::new())), None);
        assert_eq!(
            UpdatePolicy::Truthy.apply(Some("Cafe B".to_string())),
            Some("Cafe B".to_string())
        );
    }

    #[test]
    fn truthy_policy_drops_zero() {
        assert_eq!(UpdatePolicy::Truthy.apply(Some(0_i64)), None);
        assert_eq!(UpdatePolicy::Truthy.apply(Some(7_i64)), Some(7));
    }

    #[test]
    fn truthy_policy_never_clears_nullable() {
        let cleared: Option<Option<String>> = Some(None);
        assert_eq!(UpdatePolicy::Truthy.apply_nullable(cleared), None);
        assert_eq!(
            UpdatePolicy::Truthy.apply_nullable(Some(Some(String::new()))),
            None
        );
    }

    // --- Explicit policy ---

    #[test]
    fn explicit_policy_keeps_false() {
        assert_eq!(UpdatePolicy::Explicit.apply(Some(false)), Some(false));
        assert_eq!(UpdatePolicy::Explicit.apply::<bool>(None), None);
    }

    #[test]
    fn explicit_policy_clears_nullable() {
        let cleared: Option<Option<String>> = Some(None);
        assert_eq!(UpdatePolicy::Explicit.apply_nullable(cleared), Some(None));
        assert_eq!(
            UpdatePolicy::Explicit.apply_nullable(Some(Some(String::new()))),
            Some(Some(String::new()))
        );
    }

    // --- Parsing ---

    #[test]
    fn update_policy_parses_case_insensitive() {
        assert_eq!("TRUTHY".parse::<UpdatePolicy>().unwrap(), UpdatePolicy::Truthy);
        assert_eq!(
            " explicit ".parse::<UpdatePolicy>().unwrap(),
            UpdatePolicy::Explicit
        );
    }

    #[test]
    fn update_policy_rejects_unknown() {
        let err = "lenient".parse::<UpdatePolicy>().unwrap_err();
        assert!(err.to_string().contains("Invalid update policy"));
    }

    #[test]
    fn update_policy_defaults_to_truthy() {
        assert_eq!(UpdatePolicy::default(), UpdatePolicy::Truthy);
        assert_eq!(UpdatePolicy::default().to_string(), "truthy");
    }
}
