//! Account service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::AppError,
    model::account::{Account, UpsertAccountParam},
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all accounts ordered by name.
    pub async fn list(&self) -> Result<Vec<Account>, AppError> {
        AccountRepository::new(self.db).get_all().await
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn get(&self, account_id: &str) -> Result<Account, AppError> {
        AccountRepository::new(self.db)
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    pub async fn create(&self, param: UpsertAccountParam) -> Result<Account, AppError> {
        AccountRepository::new(self.db).create(param).await
    }

    /// Replaces an account's fields.
    ///
    /// # Returns
    /// - `Ok(Account)` - Updated account
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn update(
        &self,
        account_id: &str,
        param: UpsertAccountParam,
    ) -> Result<Account, AppError> {
        AccountRepository::new(self.db)
            .update(account_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    /// Deletes an account. Transactions booked on it are kept.
    pub async fn delete(&self, account_id: &str) -> Result<(), AppError> {
        if !AccountRepository::new(self.db).delete(account_id).await? {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        Ok(())
    }
}
