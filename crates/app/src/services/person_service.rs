//! Person service — use-cases for managing people.

use garage_domain::error::{GarageError, NotFoundError};
use garage_domain::id::PersonId;
use garage_domain::person::{NewPerson, Person};

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new person.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::Conflict`] when the identity number is already
    /// registered, or a storage error propagated from the repository.
    pub async fn create_person(&self, draft: NewPerson) -> Result<Person, GarageError> {
        let person = self.repo.create(draft).await?;
        tracing::debug!(id = %person.id, "person created");
        Ok(person)
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, GarageError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, GarageError> {
        self.repo.get_all().await
    }

    /// Replace all fields of an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::NotFound`] when `id` matches no row,
    /// [`GarageError::Conflict`] when the new identity number collides with
    /// another person, or a storage error from the repository.
    pub async fn update_person(
        &self,
        id: PersonId,
        draft: NewPerson,
    ) -> Result<Person, GarageError> {
        self.repo.update(id, draft).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError::NotFound`] when no row was removed, or a
    /// storage error from the repository.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), GarageError> {
        if self.repo.delete(id).await? {
            tracing::debug!(id = %id, "person deleted");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into())
        }
    }
}
