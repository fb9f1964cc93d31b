//! SeaORM entity models for the Saferide bookkeeping database.
//!
//! One module per table. Ids are opaque UUID strings generated by the server,
//! enumerated values (roles, entry types, payment methods) are stored as plain
//! strings and parsed into domain types at the repository boundary.

pub mod prelude;

pub mod account;
pub mod bank_document;
pub mod customer;
pub mod customer_remark;
pub mod important_upload;
pub mod ledger_transaction;
pub mod misc_item;
pub mod service_entry;
pub mod user;
pub mod vehicle;
