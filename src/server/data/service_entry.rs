//! Service log data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::vehicle::{ServiceEntry, UpsertServiceEntryParam},
};

use entity::service_entry::Column;

pub struct ServiceEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceEntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a service entry to the log of `vehicle_id`.
    ///
    /// Does not check that the vehicle exists; callers verify it first.
    pub async fn create(
        &self,
        vehicle_id: &str,
        param: UpsertServiceEntryParam,
        user_id: &str,
    ) -> Result<ServiceEntry, DbErr> {
        let entity = entity::service_entry::ActiveModel {
            id: ActiveValue::Set(new_id()),
            vehicle_id: ActiveValue::Set(vehicle_id.to_string()),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            km_stand: ActiveValue::Set(param.km_stand),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ServiceEntry::from_entity(entity))
    }

    pub async fn find_by_id(&self, entry_id: &str) -> Result<Option<ServiceEntry>, DbErr> {
        let entity = entity::prelude::ServiceEntry::find_by_id(entry_id)
            .one(self.db)
            .await?;

        Ok(entity.map(ServiceEntry::from_entity))
    }

    /// Gets the service log of a vehicle, most recent first.
    pub async fn get_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ServiceEntry>, DbErr> {
        let entities = entity::prelude::ServiceEntry::find()
            .filter(Column::VehicleId.eq(vehicle_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServiceEntry::from_entity).collect())
    }

    pub async fn update(
        &self,
        entry_id: &str,
        param: UpsertServiceEntryParam,
    ) -> Result<Option<ServiceEntry>, DbErr> {
        let Some(entity) = entity::prelude::ServiceEntry::find_by_id(entry_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.date = ActiveValue::Set(param.date);
        active.description = ActiveValue::Set(param.description);
        active.km_stand = ActiveValue::Set(param.km_stand);
        let updated = active.update(self.db).await?;

        Ok(Some(ServiceEntry::from_entity(updated)))
    }

    pub async fn exists(&self, entry_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ServiceEntry::find_by_id(entry_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_file_url(&self, entry_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ServiceEntry::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(entry_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, entry_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ServiceEntry::delete_by_id(entry_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes the whole service log of a vehicle.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted entries
    pub async fn delete_by_vehicle(&self, vehicle_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ServiceEntry::delete_many()
            .filter(Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
