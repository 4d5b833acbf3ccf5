//! # garage-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `garage-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Translate vendor error codes into the domain error taxonomy; no other
//!   crate inspects sqlx errors
//!
//! ## Dependency rule
//! Depends on `garage-app` (for port traits) and `garage-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod car_repo;
pub mod error;
pub mod person_repo;
pub mod pool;

pub use car_repo::SqliteCarRepository;
pub use error::StorageError;
pub use person_repo::SqlitePersonRepository;
pub use pool::{Config, Database};
