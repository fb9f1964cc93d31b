//! Account data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    error::AppError,
    model::account::{Account, UpsertAccountParam},
};

pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertAccountParam) -> Result<Account, AppError> {
        let entity = entity::account::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(param.name),
            account_type: ActiveValue::Set(param.account_type.as_str().to_string()),
            category: ActiveValue::Set(param.category.flatten().map(|c| c.as_str().to_string())),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Account::from_entity(entity)
    }

    pub async fn find_by_id(&self, account_id: &str) -> Result<Option<Account>, AppError> {
        let entity = entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?;

        entity.map(Account::from_entity).transpose()
    }

    /// Finds the first account with the exact given name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Account>, AppError> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(Account::from_entity).transpose()
    }

    /// Loads every account referenced by `account_ids` in a single query.
    ///
    /// IDs without a matching account are absent from the returned map.
    ///
    /// # Returns
    /// - `Ok(HashMap<String, Account>)` - Accounts keyed by ID
    /// - `Err(AppError)` - Database error or unparseable stored values
    pub async fn find_by_ids(
        &self,
        account_ids: &[String],
    ) -> Result<HashMap<String, Account>, AppError> {
        if account_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Account::find()
            .filter(entity::account::Column::Id.is_in(account_ids.iter().cloned()))
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|e| Account::from_entity(e).map(|a| (a.id.clone(), a)))
            .collect()
    }

    /// Gets all accounts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Account>, AppError> {
        let entities = entity::prelude::Account::find()
            .order_by_asc(entity::account::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Account::from_entity).collect()
    }

    /// Replaces name and type of an account. The category is only replaced when the
    /// param carries one.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Updated account
    /// - `Ok(None)` - No account with that ID
    pub async fn update(
        &self,
        account_id: &str,
        param: UpsertAccountParam,
    ) -> Result<Option<Account>, AppError> {
        let Some(entity) = entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.account_type = ActiveValue::Set(param.account_type.as_str().to_string());
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category.map(|c| c.as_str().to_string()));
        }
        let updated = active.update(self.db).await?;

        Account::from_entity(updated).map(Some)
    }

    pub async fn exists(&self, account_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find_by_id(account_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes an account. Transactions booked on it are left untouched.
    pub async fn delete(&self, account_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
