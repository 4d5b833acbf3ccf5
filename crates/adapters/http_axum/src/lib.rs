//! # garage-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API (`/api/personas`, `/api/coches`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON HTTP responses
//! - Permit cross-origin requests unconditionally and trace every request
//!
//! ## Dependency rule
//! Depends on `garage-app` (for port traits and services) and `garage-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
