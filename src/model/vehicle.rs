use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: String,
    pub marke: String,
    pub modell: String,
    pub chassis_nr: String,
    /// First registration, free text as printed on the vehicle papers
    pub first_inv: String,
    pub km_stand: i64,
    pub sommerreifen: Option<String>,
    pub winterreifen: Option<String>,
    pub notes: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertVehicleDto {
    pub marke: String,
    pub modell: String,
    #[serde(default)]
    pub chassis_nr: String,
    #[serde(default)]
    pub first_inv: String,
    #[serde(default)]
    pub km_stand: i64,
    #[serde(default)]
    pub sommerreifen: Option<String>,
    #[serde(default)]
    pub winterreifen: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceEntryDto {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub km_stand: Option<i64>,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Body of service log create and update requests. The vehicle comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertServiceEntryDto {
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub km_stand: Option<i64>,
}
