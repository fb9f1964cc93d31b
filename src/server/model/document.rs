//! Domain models for bank documents, misc items and important uploads.
//!
//! Bank documents and misc items are filed under a `YYYY-MM` month that is chosen
//! by the user and may differ from the document date.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::document::{
        BankDocumentDto, CreateBankDocumentDto, CreateImportantUploadDto, ImportantUploadDto,
        MiscItemDto, UpsertMiscItemDto,
    },
    server::{error::AppError, model::period::YearMonth, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BankDocument {
    pub id: String,
    pub date: NaiveDate,
    pub month: YearMonth,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl BankDocument {
    pub fn into_dto(self) -> BankDocumentDto {
        BankDocumentDto {
            id: self.id,
            date: self.date,
            month: self.month.to_string(),
            file_url: self.file_url,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    /// # Returns
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored month is not `YYYY-MM`
    pub fn from_entity(entity: entity::bank_document::Model) -> Result<Self, AppError> {
        Ok(Self {
            month: parse_stored("bank_document", "month", &entity.month)?,
            id: entity.id,
            date: entity.date,
            file_url: entity.file_url,
            user_id: entity.user_id,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateBankDocumentParam {
    pub date: NaiveDate,
    pub month: YearMonth,
    pub user_id: String,
}

impl CreateBankDocumentParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Month is not `YYYY-MM`
    pub fn from_dto(user_id: String, dto: CreateBankDocumentDto) -> Result<Self, AppError> {
        Ok(Self {
            date: dto.date,
            month: YearMonth::parse(&dto.month)?,
            user_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiscItem {
    pub id: String,
    pub date: NaiveDate,
    pub month: YearMonth,
    pub remarks: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl MiscItem {
    pub fn into_dto(self) -> MiscItemDto {
        MiscItemDto {
            id: self.id,
            date: self.date,
            month: self.month.to_string(),
            remarks: self.remarks,
            file_url: self.file_url,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    /// # Returns
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored month is not `YYYY-MM`
    pub fn from_entity(entity: entity::misc_item::Model) -> Result<Self, AppError> {
        Ok(Self {
            month: parse_stored("misc_item", "month", &entity.month)?,
            id: entity.id,
            date: entity.date,
            remarks: entity.remarks,
            file_url: entity.file_url,
            user_id: entity.user_id,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpsertMiscItemParam {
    pub date: NaiveDate,
    pub month: YearMonth,
    pub remarks: String,
}

impl UpsertMiscItemParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Month is not `YYYY-MM`
    pub fn from_dto(dto: UpsertMiscItemDto) -> Result<Self, AppError> {
        Ok(Self {
            date: dto.date,
            month: YearMonth::parse(&dto.month)?,
            remarks: dto.remarks,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportantUpload {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl ImportantUpload {
    pub fn into_dto(self) -> ImportantUploadDto {
        ImportantUploadDto {
            id: self.id,
            date: self.date,
            description: self.description,
            file_url: self.file_url,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::important_upload::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            description: entity.description,
            file_url: entity.file_url,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateImportantUploadParam {
    pub date: NaiveDate,
    pub description: String,
    pub user_id: String,
}

impl CreateImportantUploadParam {
    pub fn from_dto(user_id: String, dto: CreateImportantUploadDto) -> Self {
        Self {
            date: dto.date,
            description: dto.description,
            user_id,
        }
    }
}
