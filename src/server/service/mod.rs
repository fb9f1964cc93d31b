//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce business
//! rules such as existence checks on referenced records, resolve related data in
//! batches, and work with domain models rather than DTOs or entity models.

pub mod account;
pub mod attachment;
pub mod auth;
pub mod customer;
pub mod document;
pub mod pdf;
pub mod report;
pub mod transaction;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
