//! API data transfer objects.
//!
//! Types in this module define the JSON shapes exchanged over HTTP. They carry serde
//! and OpenAPI schema derives only; validation and conversion into domain models
//! happens in `server::model`.

pub mod account;
pub mod api;
pub mod auth;
pub mod customer;
pub mod document;
pub mod report;
pub mod transaction;
pub mod vehicle;
