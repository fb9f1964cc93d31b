//! Vehicle fleet service.
//!
//! Manages vehicles and their service logs. A vehicle's service entries are removed
//! together with the vehicle.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{service_entry::ServiceEntryRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{ServiceEntry, UpsertServiceEntryParam, UpsertVehicleParam, Vehicle},
};

fn vehicle_not_found() -> AppError {
    AppError::NotFound("Vehicle not found".to_string())
}

fn service_entry_not_found() -> AppError {
    AppError::NotFound("Service entry not found".to_string())
}

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists vehicles ordered by make, then model.
    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(VehicleRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, vehicle_id: &str) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(vehicle_not_found)
    }

    pub async fn create(&self, param: UpsertVehicleParam) -> Result<Vehicle, AppError> {
        Ok(VehicleRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        vehicle_id: &str,
        param: UpsertVehicleParam,
    ) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .update(vehicle_id, param)
            .await?
            .ok_or_else(vehicle_not_found)
    }

    /// Deletes a vehicle along with its service log.
    ///
    /// # Returns
    /// - `Ok(())` - Vehicle and entries deleted
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    pub async fn delete(&self, vehicle_id: &str) -> Result<(), AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        if !vehicle_repo.exists(vehicle_id).await? {
            return Err(vehicle_not_found());
        }

        let removed = ServiceEntryRepository::new(self.db)
            .delete_by_vehicle(vehicle_id)
            .await?;
        vehicle_repo.delete(vehicle_id).await?;

        tracing::debug!(
            "Deleted vehicle {} with {} service entries",
            vehicle_id,
            removed
        );

        Ok(())
    }

    /// Lists a vehicle's service log, most recent first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    pub async fn list_service_entries(
        &self,
        vehicle_id: &str,
    ) -> Result<Vec<ServiceEntry>, AppError> {
        if !VehicleRepository::new(self.db).exists(vehicle_id).await? {
            return Err(vehicle_not_found());
        }

        Ok(ServiceEntryRepository::new(self.db)
            .get_by_vehicle(vehicle_id)
            .await?)
    }

    /// Adds an entry to a vehicle's service log.
    ///
    /// # Returns
    /// - `Ok(ServiceEntry)` - Created entry
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    pub async fn add_service_entry(
        &self,
        vehicle_id: &str,
        param: UpsertServiceEntryParam,
        user_id: &str,
    ) -> Result<ServiceEntry, AppError> {
        if !VehicleRepository::new(self.db).exists(vehicle_id).await? {
            return Err(vehicle_not_found());
        }

        Ok(ServiceEntryRepository::new(self.db)
            .create(vehicle_id, param, user_id)
            .await?)
    }

    pub async fn update_service_entry(
        &self,
        entry_id: &str,
        param: UpsertServiceEntryParam,
    ) -> Result<ServiceEntry, AppError> {
        ServiceEntryRepository::new(self.db)
            .update(entry_id, param)
            .await?
            .ok_or_else(service_entry_not_found)
    }

    pub async fn delete_service_entry(&self, entry_id: &str) -> Result<(), AppError> {
        if !ServiceEntryRepository::new(self.db).delete(entry_id).await? {
            return Err(service_entry_not_found());
        }

        Ok(())
    }
}
