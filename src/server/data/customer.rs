//! Customer data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::customer::{Customer, UpsertCustomerParam},
};

use entity::customer::Column;

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertCustomerParam) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(param.name),
            vorname: ActiveValue::Set(param.vorname),
            strasse: ActiveValue::Set(param.strasse),
            plz: ActiveValue::Set(param.plz),
            ort: ActiveValue::Set(param.ort),
            telefon: ActiveValue::Set(param.telefon),
            email: ActiveValue::Set(param.email),
            active: ActiveValue::Set(param.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    pub async fn find_by_id(&self, customer_id: &str) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Gets customers ordered by last name, then first name.
    ///
    /// # Arguments
    /// - `active` - When set, only customers with that active flag are returned
    pub async fn get_all(&self, active: Option<bool>) -> Result<Vec<Customer>, DbErr> {
        let mut query = entity::prelude::Customer::find();
        if let Some(active) = active {
            query = query.filter(Column::Active.eq(active));
        }

        let entities = query
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Vorname)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    pub async fn update(
        &self,
        customer_id: &str,
        param: UpsertCustomerParam,
    ) -> Result<Option<Customer>, DbErr> {
        let Some(entity) = entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.vorname = ActiveValue::Set(param.vorname);
        active.strasse = ActiveValue::Set(param.strasse);
        active.plz = ActiveValue::Set(param.plz);
        active.ort = ActiveValue::Set(param.ort);
        active.telefon = ActiveValue::Set(param.telefon);
        active.email = ActiveValue::Set(param.email);
        active.active = ActiveValue::Set(param.active);
        let updated = active.update(self.db).await?;

        Ok(Some(Customer::from_entity(updated)))
    }

    pub async fn exists(&self, customer_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Customer::find_by_id(customer_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, customer_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(customer_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
