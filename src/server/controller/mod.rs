//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into
//! domain parameters, call the matching service and convert the result back into a
//! DTO response.

pub mod account;
pub mod auth;
pub mod customer;
pub mod document;
pub mod file;
pub mod report;
pub mod transaction;
pub mod user;
pub mod vehicle;
