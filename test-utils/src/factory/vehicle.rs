//! Vehicle factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    marke: String,
    modell: String,
    km_stand: i64,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - marke: `"VW"`
    /// - modell: `"Golf {n}"`
    /// - km_stand: `10000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            marke: "VW".to_string(),
            modell: format!("Golf {}", id),
            km_stand: 10_000,
        }
    }

    pub fn marke(mut self, marke: impl Into<String>) -> Self {
        self.marke = marke.into();
        self
    }

    pub fn modell(mut self, modell: impl Into<String>) -> Self {
        self.modell = modell.into();
        self
    }

    pub fn km_stand(mut self, km_stand: i64) -> Self {
        self.km_stand = km_stand;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            marke: ActiveValue::Set(self.marke),
            modell: ActiveValue::Set(self.modell),
            chassis_nr: ActiveValue::Set("WVWZZZ1KZ6W000001".to_string()),
            first_inv: ActiveValue::Set("2021-04-01".to_string()),
            km_stand: ActiveValue::Set(self.km_stand),
            sommerreifen: ActiveValue::Set(None),
            winterreifen: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            file_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
