//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::account::AccountFactory::new(&db)
//!     .name("Einnahmen Fahrstunden")
//!     .account_type("income")
//!     .category(Some("driving_lessons"))
//!     .build()
//!     .await?;
//!
//! let transaction = factory::transaction::TransactionFactory::new(&db, &account.id, &user.id)
//!     .date(2025, 3, 10)
//!     .amount(120.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with placeholder password hashes
//! - `account` - Chart of account entries
//! - `transaction` - Ledger transactions
//! - `vehicle` - Vehicles
//! - `customer` - Customers
//! - `helpers` - Unique counters and multi-entity helpers

pub mod account;
pub mod customer;
pub mod helpers;
pub mod transaction;
pub mod user;
pub mod vehicle;

pub use account::create_account;
pub use customer::create_customer;
pub use transaction::create_transaction;
pub use user::create_user;
pub use vehicle::create_vehicle;
