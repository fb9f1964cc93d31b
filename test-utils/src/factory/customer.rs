//! Customer factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vorname: String,
    active: bool,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Muster{n}"`
    /// - vorname: `"Max"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Muster{}", id),
            vorname: "Max".to_string(),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn vorname(mut self, vorname: impl Into<String>) -> Self {
        self.vorname = vorname.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            vorname: ActiveValue::Set(self.vorname),
            strasse: ActiveValue::Set("Bahnhofstrasse 1".to_string()),
            plz: ActiveValue::Set("8001".to_string()),
            ort: ActiveValue::Set("Zürich".to_string()),
            telefon: ActiveValue::Set("044 000 00 00".to_string()),
            email: ActiveValue::Set("max@example.ch".to_string()),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
