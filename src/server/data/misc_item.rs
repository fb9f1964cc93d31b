//! Misc item data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    error::AppError,
    model::{
        document::{MiscItem, UpsertMiscItemParam},
        period::YearMonth,
    },
};

use entity::misc_item::Column;

pub struct MiscItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MiscItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: UpsertMiscItemParam,
        user_id: &str,
    ) -> Result<MiscItem, AppError> {
        let entity = entity::misc_item::ActiveModel {
            id: ActiveValue::Set(new_id()),
            date: ActiveValue::Set(param.date),
            month: ActiveValue::Set(param.month.to_string()),
            remarks: ActiveValue::Set(param.remarks),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        MiscItem::from_entity(entity)
    }

    /// Gets the items filed under `month`, most recent first.
    pub async fn get_by_month(&self, month: YearMonth) -> Result<Vec<MiscItem>, AppError> {
        let entities = entity::prelude::MiscItem::find()
            .filter(Column::Month.eq(month.to_string()))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(MiscItem::from_entity).collect()
    }

    pub async fn update(
        &self,
        item_id: &str,
        param: UpsertMiscItemParam,
    ) -> Result<Option<MiscItem>, AppError> {
        let Some(entity) = entity::prelude::MiscItem::find_by_id(item_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.date = ActiveValue::Set(param.date);
        active.month = ActiveValue::Set(param.month.to_string());
        active.remarks = ActiveValue::Set(param.remarks);
        let updated = active.update(self.db).await?;

        MiscItem::from_entity(updated).map(Some)
    }

    pub async fn exists(&self, item_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::MiscItem::find_by_id(item_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_file_url(&self, item_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::MiscItem::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, item_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::MiscItem::delete_by_id(item_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
