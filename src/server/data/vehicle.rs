//! Vehicle data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::vehicle::{UpsertVehicleParam, Vehicle},
};

use entity::vehicle::Column;

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertVehicleParam) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            id: ActiveValue::Set(new_id()),
            marke: ActiveValue::Set(param.marke),
            modell: ActiveValue::Set(param.modell),
            chassis_nr: ActiveValue::Set(param.chassis_nr),
            first_inv: ActiveValue::Set(param.first_inv),
            km_stand: ActiveValue::Set(param.km_stand),
            sommerreifen: ActiveValue::Set(param.sommerreifen),
            winterreifen: ActiveValue::Set(param.winterreifen),
            notes: ActiveValue::Set(param.notes),
            file_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    pub async fn find_by_id(&self, vehicle_id: &str) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Gets all vehicles ordered by make, then model.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(Column::Marke)
            .order_by_asc(Column::Modell)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Replaces the descriptive fields of a vehicle, keeping its registration document.
    pub async fn update(
        &self,
        vehicle_id: &str,
        param: UpsertVehicleParam,
    ) -> Result<Option<Vehicle>, DbErr> {
        let Some(entity) = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.marke = ActiveValue::Set(param.marke);
        active.modell = ActiveValue::Set(param.modell);
        active.chassis_nr = ActiveValue::Set(param.chassis_nr);
        active.first_inv = ActiveValue::Set(param.first_inv);
        active.km_stand = ActiveValue::Set(param.km_stand);
        active.sommerreifen = ActiveValue::Set(param.sommerreifen);
        active.winterreifen = ActiveValue::Set(param.winterreifen);
        active.notes = ActiveValue::Set(param.notes);
        let updated = active.update(self.db).await?;

        Ok(Some(Vehicle::from_entity(updated)))
    }

    pub async fn exists(&self, vehicle_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_file_url(&self, vehicle_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(vehicle_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, vehicle_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
