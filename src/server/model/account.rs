//! Chart of accounts domain model.

use chrono::{DateTime, Utc};

use crate::{
    model::account::{AccountCategory, AccountDto, EntryType, UpsertAccountDto},
    server::{
        error::AppError,
        util::parse::{parse_stored, parse_stored_opt},
    },
};

/// A named bucket that transactions are booked against.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: EntryType,
    /// Reporting tag, e.g. driving lessons for the statistics report.
    pub category: Option<AccountCategory>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_driving_lessons(&self) -> bool {
        self.category == Some(AccountCategory::DrivingLessons)
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            name: self.name,
            account_type: self.account_type,
            category: self.category,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored type or category is unknown
    pub fn from_entity(entity: entity::account::Model) -> Result<Self, AppError> {
        Ok(Self {
            account_type: parse_stored("account", "account_type", &entity.account_type)?,
            category: parse_stored_opt("account", "category", entity.category.as_deref())?,
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating or replacing an account.
#[derive(Debug, Clone)]
pub struct UpsertAccountParam {
    pub name: String,
    pub account_type: EntryType,
    /// `None` keeps the stored category on update and stores none on create.
    pub category: Option<Option<AccountCategory>>,
}

impl UpsertAccountParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Name is blank
    pub fn from_dto(dto: UpsertAccountDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Account name must not be empty".to_string()));
        }

        Ok(Self {
            name,
            account_type: dto.account_type,
            category: dto.category,
        })
    }
}
