//! Customer remark data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::customer::{CreateCustomerRemarkParam, CustomerRemark},
};

use entity::customer_remark::Column;

pub struct CustomerRemarkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRemarkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCustomerRemarkParam) -> Result<CustomerRemark, DbErr> {
        let entity = entity::customer_remark::ActiveModel {
            id: ActiveValue::Set(new_id()),
            customer_id: ActiveValue::Set(param.customer_id),
            date: ActiveValue::Set(param.date),
            remarks: ActiveValue::Set(param.remarks),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(param.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(CustomerRemark::from_entity(entity))
    }

    /// Gets all remarks of a customer, most recent first.
    pub async fn get_by_customer(&self, customer_id: &str) -> Result<Vec<CustomerRemark>, DbErr> {
        let entities = entity::prelude::CustomerRemark::find()
            .filter(Column::CustomerId.eq(customer_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CustomerRemark::from_entity).collect())
    }

    pub async fn exists(&self, remark_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CustomerRemark::find_by_id(remark_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_file_url(&self, remark_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CustomerRemark::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(remark_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, remark_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CustomerRemark::delete_by_id(remark_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every remark of a customer.
    pub async fn delete_by_customer(&self, customer_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::CustomerRemark::delete_many()
            .filter(Column::CustomerId.eq(customer_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
