//! Transaction service.
//!
//! Resolves account names for every read and checks that the referenced account
//! exists before a transaction is written.

use std::collections::{BTreeSet, HashMap};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, transaction::TransactionRepository},
    error::AppError,
    model::{
        account::Account,
        transaction::{Transaction, TransactionFilter, UpsertTransactionParam},
    },
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists transactions, newest first, optionally limited to a year or month.
    pub async fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, AppError> {
        let transactions = TransactionRepository::new(self.db).list(filter).await?;

        self.with_account_names(transactions).await
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No transaction with that ID
    pub async fn get(&self, transaction_id: &str) -> Result<Transaction, AppError> {
        let Some(transaction) = TransactionRepository::new(self.db)
            .find_by_id(transaction_id)
            .await?
        else {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        };

        self.with_account_name(transaction).await
    }

    /// Books a new transaction for `user_id`.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Created transaction with account name
    /// - `Err(AppError::Validation)` - Referenced account does not exist
    pub async fn create(
        &self,
        param: UpsertTransactionParam,
        user_id: &str,
    ) -> Result<Transaction, AppError> {
        self.require_account(&param.account_id).await?;

        let transaction = TransactionRepository::new(self.db)
            .create(param, user_id)
            .await?;

        self.with_account_name(transaction).await
    }

    /// Replaces a transaction's fields. Any user may edit any transaction.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Updated transaction
    /// - `Err(AppError::NotFound)` - No transaction with that ID
    /// - `Err(AppError::Validation)` - Referenced account does not exist
    pub async fn update(
        &self,
        transaction_id: &str,
        param: UpsertTransactionParam,
    ) -> Result<Transaction, AppError> {
        let repo = TransactionRepository::new(self.db);

        if !repo.exists(transaction_id).await? {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }
        self.require_account(&param.account_id).await?;

        let transaction = repo
            .update(transaction_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

        self.with_account_name(transaction).await
    }

    pub async fn delete(&self, transaction_id: &str) -> Result<(), AppError> {
        if !TransactionRepository::new(self.db)
            .delete(transaction_id)
            .await?
        {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }

        Ok(())
    }

    async fn require_account(&self, account_id: &str) -> Result<(), AppError> {
        if !AccountRepository::new(self.db).exists(account_id).await? {
            return Err(AppError::Validation(format!(
                "Account {} does not exist",
                account_id
            )));
        }

        Ok(())
    }

    async fn with_account_name(&self, transaction: Transaction) -> Result<Transaction, AppError> {
        let mut resolved = self.with_account_names(vec![transaction]).await?;

        resolved
            .pop()
            .ok_or_else(|| AppError::InternalError("Transaction lost while resolving".to_string()))
    }

    /// Fills `account_name` from a single lookup of all referenced accounts.
    ///
    /// Transactions whose account was deleted keep `account_name: None`.
    pub async fn with_account_names(
        &self,
        transactions: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, AppError> {
        let accounts = load_accounts(self.db, &transactions).await?;

        Ok(transactions
            .into_iter()
            .map(|mut t| {
                t.account_name = accounts.get(&t.account_id).map(|a| a.name.clone());
                t
            })
            .collect())
    }
}

/// Loads every account referenced by `transactions` in one query.
pub async fn load_accounts(
    db: &DatabaseConnection,
    transactions: &[Transaction],
) -> Result<HashMap<String, Account>, AppError> {
    let ids: Vec<String> = transactions
        .iter()
        .map(|t| t.account_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    AccountRepository::new(db).find_by_ids(&ids).await
}
