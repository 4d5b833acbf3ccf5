//! Use-case services, one per resource.

pub mod car_service;
pub mod person_service;
