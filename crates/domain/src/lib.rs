//! # garage-domain
//!
//! Pure domain model for the garage registry service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **People** (registered individuals, identified by a
//!   store-generated numeric id and a unique identity number)
//! - Define **Cars** (vehicles identified by their license plate, optionally
//!   owned by a person)
//! - Contain all invariant enforcement and presence validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod car;
pub mod person;
