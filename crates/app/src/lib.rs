//! # garage-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository` — CRUD for people
//!   - `CarRepository` — CRUD for cars
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService` — create, list, get, update, delete
//!   - `CarService` — create, list, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `garage-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
