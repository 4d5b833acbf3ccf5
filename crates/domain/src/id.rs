//! Typed identifier newtypes.
//!
//! People carry a store-generated numeric id; cars are identified by their
//! license plate, a natural key that never changes after creation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-generated numeric identifier of a [`Person`](crate::person::Person).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw database id.
    #[must_use]
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw numeric value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// License plate — the natural key of a [`Car`](crate::car::Car).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Wrap a plate string.
    #[must_use]
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    /// Access the plate text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Plate {
    fn from(plate: String) -> Self {
        Self(plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_person_id_through_display_and_from_str() {
        let id = PersonId::from_i64(42);
        let text = id.to_string();
        let parsed: PersonId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_person_id_as_bare_number() {
        let json = serde_json::to_string(&PersonId::from_i64(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        let result = PersonId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_plate_as_bare_string() {
        let json = serde_json::to_string(&Plate::new("1234ABC")).unwrap();
        assert_eq!(json, "\"1234ABC\"");
    }

    #[test]
    fn should_expose_plate_text() {
        let plate = Plate::new("5678DEF");
        assert_eq!(plate.as_str(), "5678DEF");
    }
}
