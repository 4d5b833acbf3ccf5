//! Car service — use-cases for managing cars.
//!
//! Unlike the person service, update and delete do not check how many rows
//! were affected: operating on a plate that matches nothing still succeeds.

use garage_domain::car::Car;
use garage_domain::error::GarageError;
use garage_domain::id::Plate;

use crate::ports::CarRepository;

/// Application service for car CRUD operations.
pub struct CarService<R> {
    repo: R,
}

impl<R: CarRepository> CarService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new car.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::Conflict`] when the plate is already
    /// registered, or a storage error propagated from the repository.
    pub async fn create_car(&self, car: Car) -> Result<Car, GarageError> {
        let car = self.repo.create(car).await?;
        tracing::debug!(plate = %car.plate, "car created");
        Ok(car)
    }

    /// List all cars.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cars(&self) -> Result<Vec<Car>, GarageError> {
        self.repo.get_all().await
    }

    /// Replace all mutable fields of the car matching the given plate.
    ///
    /// Succeeds even when the plate matches no row.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::Conflict`] on a constraint violation, or a
    /// storage error from the repository.
    pub async fn update_car(&self, car: Car) -> Result<Car, GarageError> {
        self.repo.update(car).await
    }

    /// Delete the car matching `plate`.
    ///
    /// Succeeds even when the plate matches no row.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_car(&self, plate: Plate) -> Result<(), GarageError> {
        self.repo.delete(plate).await
    }
}
