//! Shared application state for axum handlers.

use std::sync::Arc;

use garage_app::ports::{CarRepository, PersonRepository};
use garage_app::services::car_service::CarService;
use garage_app::services::person_service::PersonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, CR> {
    /// Person CRUD service.
    pub person_service: Arc<PersonService<PR>>,
    /// Car CRUD service.
    pub car_service: Arc<CarService<CR>>,
}

impl<PR, CR> Clone for AppState<PR, CR> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
            car_service: Arc::clone(&self.car_service),
        }
    }
}

impl<PR, CR> AppState<PR, CR>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(person_service: PersonService<PR>, car_service: CarService<CR>) -> Self {
        Self {
            person_service: Arc::new(person_service),
            car_service: Arc::new(car_service),
        }
    }
}
