//! Transaction factory for creating ledger bookings.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transactions against an existing account and user.
///
/// # Example
///
/// ```rust,ignore
/// let tx = TransactionFactory::new(&db, &account.id, &user.id)
///     .date(2025, 3, 10)
///     .expense()
///     .amount(50.0)
///     .build()
///     .await?;
/// ```
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: String,
    user_id: String,
    date: NaiveDate,
    description: String,
    entry_type: String,
    amount: f64,
    payment_method: Option<String>,
    remarks: Option<String>,
}

impl<'a> TransactionFactory<'a> {
    /// Creates a new TransactionFactory with default values.
    ///
    /// Defaults:
    /// - date: 2025-01-15
    /// - description: `"Transaction {n}"`
    /// - entry_type: `"income"`
    /// - amount: `100.0`
    /// - payment_method / remarks: `None`
    pub fn new(
        db: &'a DatabaseConnection,
        account_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            account_id: account_id.into(),
            user_id: user_id.into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
            description: format!("Transaction {}", id),
            entry_type: "income".to_string(),
            amount: 100.0,
            payment_method: None,
            remarks: None,
        }
    }

    /// Sets the booking date. Panics on an invalid calendar date.
    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn income(mut self) -> Self {
        self.entry_type = "income".to_string();
        self
    }

    pub fn expense(mut self) -> Self {
        self.entry_type = "expense".to_string();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn payment_method(mut self, payment_method: Option<&str>) -> Self {
        self.payment_method = payment_method.map(str::to_string);
        self
    }

    pub fn remarks(mut self, remarks: Option<&str>) -> Self {
        self.remarks = remarks.map(str::to_string);
        self
    }

    /// Builds and inserts the transaction entity into the database.
    pub async fn build(self) -> Result<entity::ledger_transaction::Model, DbErr> {
        entity::ledger_transaction::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            date: ActiveValue::Set(self.date),
            description: ActiveValue::Set(self.description),
            entry_type: ActiveValue::Set(self.entry_type),
            amount: ActiveValue::Set(self.amount),
            account_id: ActiveValue::Set(self.account_id),
            payment_method: ActiveValue::Set(self.payment_method),
            remarks: ActiveValue::Set(self.remarks),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income transaction with default values.
pub async fn create_transaction(
    db: &DatabaseConnection,
    account_id: &str,
    user_id: &str,
) -> Result<entity::ledger_transaction::Model, DbErr> {
    TransactionFactory::new(db, account_id, user_id)
        .build()
        .await
}
