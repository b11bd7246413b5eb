//! Service layer for the medspa API.
//! - `repository`: generic CRUD over the entities in `models`, plus the
//!   appointment listing and join-table queries.
//! - `*_service`: operations called by the HTTP handlers.
//! - Errors are `ServiceError`; the server maps them to status codes.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod medspa_service;
pub mod catalog_service;
pub mod booking_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
