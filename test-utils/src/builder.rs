use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Account, LedgerTransaction};
///
/// let test = TestBuilder::new()
///     .with_table(Account)
///     .with_table(LedgerTransaction)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for bookkeeping: users, accounts and transactions.
    pub fn with_ledger_tables(self) -> Self {
        self.with_table(User)
            .with_table(Account)
            .with_table(LedgerTransaction)
    }

    /// Adds the vehicle and service log tables.
    pub fn with_fleet_tables(self) -> Self {
        self.with_table(Vehicle).with_table(ServiceEntry)
    }

    /// Adds the customer and customer remark tables.
    pub fn with_customer_tables(self) -> Self {
        self.with_table(Customer).with_table(CustomerRemark)
    }

    /// Adds the bank document, misc item and important upload tables.
    pub fn with_document_tables(self) -> Self {
        self.with_table(BankDocument)
            .with_table(MiscItem)
            .with_table(ImportantUpload)
    }

    /// Adds every table of the application.
    pub fn with_all_tables(self) -> Self {
        self.with_ledger_tables()
            .with_fleet_tables()
            .with_customer_tables()
            .with_document_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
