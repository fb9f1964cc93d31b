//! Account factory for creating chart-of-account entries.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts.
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    account_type: String,
    category: Option<String>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Account {n}"`
    /// - account_type: `"income"`
    /// - category: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Account {}", id),
            account_type: "income".to_string(),
            category: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the raw account type (`income` or `expense`).
    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }

    /// Sets the raw reporting category tag.
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_string);
        self
    }

    /// Builds and inserts the account entity into the database.
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            account_type: ActiveValue::Set(self.account_type),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income account with default values.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
