//! Storage port — repository traits for persistence.
//!
//! Every method issues exactly one parameterized statement against the
//! underlying store; there are no transactions spanning multiple calls.

use std::future::Future;

use garage_domain::car::Car;
use garage_domain::error::GarageError;
use garage_domain::id::{PersonId, Plate};
use garage_domain::person::{NewPerson, Person};

/// Persistence operations for people.
pub trait PersonRepository {
    /// Insert a new person and return the stored row, including the
    /// store-generated id. A duplicate identity number surfaces as
    /// [`GarageError::Conflict`].
    fn create(&self, draft: NewPerson) -> impl Future<Output = Result<Person, GarageError>> + Send;

    /// Fetch one person by id, `None` when no row matches.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, GarageError>> + Send;

    /// Fetch the full, unfiltered collection.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, GarageError>> + Send;

    /// Replace all fields of the row matching `id`, returning the updated
    /// row or `None` when no row matched.
    fn update(
        &self,
        id: PersonId,
        draft: NewPerson,
    ) -> impl Future<Output = Result<Option<Person>, GarageError>> + Send;

    /// Delete the row matching `id`; `true` when a row was removed.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, GarageError>> + Send;
}

/// Persistence operations for cars.
///
/// Update and delete deliberately do not report whether a row matched; zero
/// affected rows is still a success.
pub trait CarRepository {
    /// Insert a new car. A duplicate plate surfaces as
    /// [`GarageError::Conflict`].
    fn create(&self, car: Car) -> impl Future<Output = Result<Car, GarageError>> + Send;

    /// Fetch the full, unfiltered collection.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Car>, GarageError>> + Send;

    /// Replace brand, model, horsepower, and owner for the row matching the
    /// car's plate. Succeeds even when no row matched.
    fn update(&self, car: Car) -> impl Future<Output = Result<Car, GarageError>> + Send;

    /// Delete the row matching `plate`. Succeeds even when no row matched.
    fn delete(&self, plate: Plate) -> impl Future<Output = Result<(), GarageError>> + Send;
}
