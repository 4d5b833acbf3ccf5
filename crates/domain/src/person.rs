//! Person — a registered individual who may own cars.

use serde::{Deserialize, Serialize};

use crate::error::{GarageError, ValidationError};
use crate::id::PersonId;

/// A registered person.
///
/// The `id` is generated by the store on insertion; `identity_number` is
/// unique across all people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub surname1: String,
    pub surname2: String,
    pub identity_number: String,
}

/// A person draft — all fields except the store-generated id.
///
/// Used both for creation and for full-replacement updates; partial updates
/// do not exist in this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub surname1: String,
    pub surname2: String,
    pub identity_number: String,
}

impl NewPerson {
    /// Assemble a draft from optional request fields.
    ///
    /// All four fields are required; an absent or empty field fails the
    /// whole request.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::Validation`] naming the first missing field.
    pub fn from_parts(
        name: Option<String>,
        surname1: Option<String>,
        surname2: Option<String>,
        identity_number: Option<String>,
    ) -> Result<Self, GarageError> {
        Ok(Self {
            name: ValidationError::require("name", name)?,
            surname1: ValidationError::require("surname1", surname1)?,
            surname2: ValidationError::require("surname2", surname2)?,
            identity_number: ValidationError::require("identityNumber", identity_number)?,
        })
    }

    /// Attach a store-generated id, producing a full [`Person`].
    #[must_use]
    pub fn with_id(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            surname1: self.surname1,
            surname2: self.surname2,
            identity_number: self.identity_number,
        }
    }
}
