//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use garage_app::ports::{CarRepository, PersonRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api`, permits cross-origin requests from any
/// origin, and includes a [`TraceLayer`] that logs each HTTP
/// request/response through the `tracing` ecosystem.
pub fn build<PR, CR>(state: AppState<PR, CR>) -> Router
where
    PR: PersonRepository + Send + Sync + 'static,
    CR: CarRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
