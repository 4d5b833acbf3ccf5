//! Car — a vehicle identified by its license plate.

use serde::{Deserialize, Serialize};

use crate::error::{GarageError, ValidationError};
use crate::id::{PersonId, Plate};

/// A registered car.
///
/// The plate is the natural key and never changes after creation. The owner
/// reference is optional; referential integrity is left to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub plate: Plate,
    pub brand: String,
    pub model: String,
    pub horsepower: i64,
    pub owner_id: Option<PersonId>,
}

impl Car {
    /// Assemble a car from optional request fields.
    ///
    /// Plate, brand, model, and horsepower are required; the owner reference
    /// may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::Validation`] naming the first missing field.
    pub fn from_parts(
        plate: Option<String>,
        brand: Option<String>,
        model: Option<String>,
        horsepower: Option<i64>,
        owner_id: Option<i64>,
    ) -> Result<Self, GarageError> {
        Ok(Self {
            plate: Plate::new(ValidationError::require("plate", plate)?),
            brand: ValidationError::require("brand", brand)?,
            model: ValidationError::require("model", model)?,
            horsepower: horsepower.ok_or(ValidationError::MissingField("horsepower"))?,
            owner_id: owner_id.map(PersonId::from_i64),
        })
    }
}
