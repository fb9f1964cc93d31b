use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub vorname: String,
    pub strasse: String,
    pub plz: String,
    pub ort: String,
    pub telefon: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertCustomerDto {
    pub name: String,
    pub vorname: String,
    #[serde(default)]
    pub strasse: String,
    #[serde(default)]
    pub plz: String,
    #[serde(default)]
    pub ort: String,
    #[serde(default)]
    pub telefon: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerRemarkDto {
    pub id: String,
    pub customer_id: String,
    pub date: NaiveDate,
    pub remarks: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerRemarkDto {
    pub date: NaiveDate,
    pub remarks: String,
}
