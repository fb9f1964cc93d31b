//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Row IDs are UUID v4 strings generated here; any ID supplied by a client is ignored.

pub mod account;
pub mod bank_document;
pub mod customer;
pub mod customer_remark;
pub mod important_upload;
pub mod misc_item;
pub mod service_entry;
pub mod transaction;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;

/// Generates a new primary key for an inserted row.
fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
