//! Vehicle and service log domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::vehicle::{ServiceEntryDto, UpsertServiceEntryDto, UpsertVehicleDto, VehicleDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub marke: String,
    pub modell: String,
    pub chassis_nr: String,
    pub first_inv: String,
    pub km_stand: i64,
    pub sommerreifen: Option<String>,
    pub winterreifen: Option<String>,
    pub notes: Option<String>,
    /// Scan of the registration document.
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            marke: self.marke,
            modell: self.modell,
            chassis_nr: self.chassis_nr,
            first_inv: self.first_inv,
            km_stand: self.km_stand,
            sommerreifen: self.sommerreifen,
            winterreifen: self.winterreifen,
            notes: self.notes,
            file_url: self.file_url,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            marke: entity.marke,
            modell: entity.modell,
            chassis_nr: entity.chassis_nr,
            first_inv: entity.first_inv,
            km_stand: entity.km_stand,
            sommerreifen: entity.sommerreifen,
            winterreifen: entity.winterreifen,
            notes: entity.notes,
            file_url: entity.file_url,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertVehicleParam {
    pub marke: String,
    pub modell: String,
    pub chassis_nr: String,
    pub first_inv: String,
    pub km_stand: i64,
    pub sommerreifen: Option<String>,
    pub winterreifen: Option<String>,
    pub notes: Option<String>,
}

impl UpsertVehicleParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Negative odometer reading
    pub fn from_dto(dto: UpsertVehicleDto) -> Result<Self, AppError> {
        if dto.km_stand < 0 {
            return Err(AppError::Validation(
                "km_stand must not be negative".to_string(),
            ));
        }

        Ok(Self {
            marke: dto.marke,
            modell: dto.modell,
            chassis_nr: dto.chassis_nr,
            first_inv: dto.first_inv,
            km_stand: dto.km_stand,
            sommerreifen: dto.sommerreifen,
            winterreifen: dto.winterreifen,
            notes: dto.notes,
        })
    }
}

/// One entry in a vehicle's service log.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEntry {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub km_stand: Option<i64>,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl ServiceEntry {
    pub fn into_dto(self) -> ServiceEntryDto {
        ServiceEntryDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            date: self.date,
            description: self.description,
            km_stand: self.km_stand,
            file_url: self.file_url,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::service_entry::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            date: entity.date,
            description: entity.description,
            km_stand: entity.km_stand,
            file_url: entity.file_url,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertServiceEntryParam {
    pub date: NaiveDate,
    pub description: String,
    pub km_stand: Option<i64>,
}

impl UpsertServiceEntryParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - Negative odometer reading
    pub fn from_dto(dto: UpsertServiceEntryDto) -> Result<Self, AppError> {
        if dto.km_stand.is_some_and(|km| km < 0) {
            return Err(AppError::Validation(
                "km_stand must not be negative".to_string(),
            ));
        }

        Ok(Self {
            date: dto.date,
            description: dto.description,
            km_stand: dto.km_stand,
        })
    }
}
