//! Monthly document records: bank statements, misc items and important uploads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BankDocumentDto {
    pub id: String,
    pub date: NaiveDate,
    /// `YYYY-MM`
    pub month: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBankDocumentDto {
    pub date: NaiveDate,
    /// `YYYY-MM`
    pub month: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MiscItemDto {
    pub id: String,
    pub date: NaiveDate,
    pub month: String,
    pub remarks: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertMiscItemDto {
    pub date: NaiveDate,
    pub month: String,
    #[serde(default)]
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportantUploadDto {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateImportantUploadDto {
    pub date: NaiveDate,
    pub description: String,
}
