//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod coches;
#[allow(clippy::missing_errors_doc)]
pub mod personas;

use axum::Router;
use axum::routing::{get, put};
use serde::Serialize;

use garage_app::ports::{CarRepository, PersonRepository};

use crate::state::AppState;

/// JSON body for responses that carry only a human-readable message.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Build the `/api` sub-router.
pub fn routes<PR, CR>() -> Router<AppState<PR, CR>>
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    Router::new()
        // People
        .route(
            "/personas",
            get(personas::list::<PR, CR>).post(personas::create::<PR, CR>),
        )
        .route(
            "/personas/{id}",
            get(personas::get::<PR, CR>)
                .put(personas::update::<PR, CR>)
                .delete(personas::delete::<PR, CR>),
        )
        // Cars
        .route(
            "/coches",
            get(coches::list::<PR, CR>).post(coches::create::<PR, CR>),
        )
        .route(
            "/coches/{plate}",
            put(coches::update::<PR, CR>).delete(coches::delete::<PR, CR>),
        )
}
