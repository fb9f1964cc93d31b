//! Bank statement data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    error::AppError,
    model::{
        document::{BankDocument, CreateBankDocumentParam},
        period::YearMonth,
    },
};

use entity::bank_document::Column;

pub struct BankDocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BankDocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateBankDocumentParam) -> Result<BankDocument, AppError> {
        let entity = entity::bank_document::ActiveModel {
            id: ActiveValue::Set(new_id()),
            date: ActiveValue::Set(param.date),
            month: ActiveValue::Set(param.month.to_string()),
            file_url: ActiveValue::Set(None),
            user_id: ActiveValue::Set(param.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        BankDocument::from_entity(entity)
    }

    /// Gets the documents filed under `month`, most recent first.
    pub async fn get_by_month(&self, month: YearMonth) -> Result<Vec<BankDocument>, AppError> {
        let entities = entity::prelude::BankDocument::find()
            .filter(Column::Month.eq(month.to_string()))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(BankDocument::from_entity).collect()
    }

    pub async fn exists(&self, document_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::BankDocument::find_by_id(document_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_file_url(&self, document_id: &str, file_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::BankDocument::update_many()
            .col_expr(Column::FileUrl, Expr::value(file_url.to_string()))
            .filter(Column::Id.eq(document_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, document_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::BankDocument::delete_by_id(document_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
