//! # garaged — garage daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use garage_adapter_http_axum::state::AppState;
use garage_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteCarRepository, SqlitePersonRepository,
};
use garage_app::services::car_service::CarService;
use garage_app::services::person_service::PersonService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let person_repo = SqlitePersonRepository::new(pool.clone());
    let car_repo = SqliteCarRepository::new(pool);

    // Services
    let person_service = PersonService::new(person_repo);
    let car_service = CarService::new(car_repo);

    // HTTP
    let state = AppState::new(person_service, car_service);
    let app = garage_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "garaged listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
