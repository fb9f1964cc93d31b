//! Important upload data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::document::{CreateImportantUploadParam, ImportantUpload},
};

use entity::important_upload::Column;

pub struct ImportantUploadRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportantUploadRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateImportantUploadParam,
    ) -> Result<ImportantUpload, DbErr> {
        let entity = entity::important_upload::ActiveModel {
            id: ActiveValue::Set(new_id()),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(param.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ImportantUpload::from_entity(entity))
    }

    /// Gets all important uploads, most recent first.
    pub async fn get_all(&self) -> Result<Vec<ImportantUpload>, DbErr> {
        let entities = entity::prelude::ImportantUpload::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ImportantUpload::from_entity).collect())
    }

    pub async fn exists(&self, upload_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ImportantUpload::find_by_id(upload_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_file_url(&self, upload_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ImportantUpload::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(upload_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, upload_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ImportantUpload::delete_by_id(upload_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
