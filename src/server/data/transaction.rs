//! Transaction data repository.
//!
//! Provides the `TransactionRepository` for ledger bookings. Date filters are applied
//! as inclusive ranges on the `date` column.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    error::AppError,
    model::{
        period::DateRange,
        transaction::{Transaction, TransactionFilter, UpsertTransactionParam},
    },
};

use entity::ledger_transaction::Column;

/// Repository providing database operations for ledger transactions.
pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    /// Creates a new TransactionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new transaction booked by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Created transaction without account name
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(
        &self,
        param: UpsertTransactionParam,
        user_id: &str,
    ) -> Result<Transaction, AppError> {
        let entity = entity::ledger_transaction::ActiveModel {
            id: ActiveValue::Set(new_id()),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            entry_type: ActiveValue::Set(param.entry_type.as_str().to_string()),
            amount: ActiveValue::Set(param.amount),
            account_id: ActiveValue::Set(param.account_id),
            payment_method: ActiveValue::Set(param.payment_method.map(|m| m.as_str().to_string())),
            remarks: ActiveValue::Set(param.remarks),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Transaction::from_entity(entity)
    }

    pub async fn find_by_id(&self, transaction_id: &str) -> Result<Option<Transaction>, AppError> {
        let entity = entity::prelude::LedgerTransaction::find_by_id(transaction_id)
            .one(self.db)
            .await?;

        entity.map(Transaction::from_entity).transpose()
    }

    /// Lists transactions newest first.
    ///
    /// Ordered by date descending, then by creation time descending for bookings on the
    /// same day.
    ///
    /// # Arguments
    /// - `filter` - Optional inclusive date range
    ///
    /// # Returns
    /// - `Ok(Vec<Transaction>)` - Matching transactions without account names
    /// - `Err(AppError)` - Database error or unparseable stored values
    pub async fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, AppError> {
        let mut query = entity::prelude::LedgerTransaction::find();
        if let Some(range) = filter.range {
            query = query.filter(Column::Date.between(range.start, range.end));
        }

        let entities = query
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Transaction::from_entity).collect()
    }

    /// Lists transactions within `range` in chronological order.
    ///
    /// Used by reports and the monthly export.
    pub async fn list_chronological(&self, range: DateRange) -> Result<Vec<Transaction>, AppError> {
        let entities = entity::prelude::LedgerTransaction::find()
            .filter(Column::Date.between(range.start, range.end))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Transaction::from_entity).collect()
    }

    /// Replaces every editable field of a transaction.
    ///
    /// The creator and any attached file are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Transaction))` - Updated transaction
    /// - `Ok(None)` - No transaction with that ID
    pub async fn update(
        &self,
        transaction_id: &str,
        param: UpsertTransactionParam,
    ) -> Result<Option<Transaction>, AppError> {
        let Some(entity) = entity::prelude::LedgerTransaction::find_by_id(transaction_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.date = ActiveValue::Set(param.date);
        active.description = ActiveValue::Set(param.description);
        active.entry_type = ActiveValue::Set(param.entry_type.as_str().to_string());
        active.amount = ActiveValue::Set(param.amount);
        active.account_id = ActiveValue::Set(param.account_id);
        active.payment_method =
            ActiveValue::Set(param.payment_method.map(|m| m.as_str().to_string()));
        active.remarks = ActiveValue::Set(param.remarks);
        let updated = active.update(self.db).await?;

        Transaction::from_entity(updated).map(Some)
    }

    pub async fn exists(&self, transaction_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::LedgerTransaction::find_by_id(transaction_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Points the transaction's `file_url` at an uploaded receipt.
    ///
    /// # Returns
    /// - `Ok(true)` - URL stored
    /// - `Ok(false)` - No transaction with that ID
    pub async fn set_file_url(&self, transaction_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::LedgerTransaction::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(transaction_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, transaction_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::LedgerTransaction::delete_by_id(transaction_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
