//! Monthly document filing service.
//!
//! Covers bank statements and miscellaneous receipts filed under a month, and
//! important uploads that are not tied to any month.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        bank_document::BankDocumentRepository, important_upload::ImportantUploadRepository,
        misc_item::MiscItemRepository,
    },
    error::AppError,
    model::{
        document::{
            BankDocument, CreateBankDocumentParam, CreateImportantUploadParam, ImportantUpload,
            MiscItem, UpsertMiscItemParam,
        },
        period::YearMonth,
    },
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists bank documents filed under `month`, most recent first.
    pub async fn list_bank_documents(&self, month: YearMonth) -> Result<Vec<BankDocument>, AppError> {
        BankDocumentRepository::new(self.db).get_by_month(month).await
    }

    pub async fn create_bank_document(
        &self,
        param: CreateBankDocumentParam,
    ) -> Result<BankDocument, AppError> {
        BankDocumentRepository::new(self.db).create(param).await
    }

    pub async fn delete_bank_document(&self, document_id: &str) -> Result<(), AppError> {
        if !BankDocumentRepository::new(self.db)
            .delete(document_id)
            .await?
        {
            return Err(AppError::NotFound("Bank document not found".to_string()));
        }

        Ok(())
    }

    /// Lists misc items filed under `month`, most recent first.
    pub async fn list_misc_items(&self, month: YearMonth) -> Result<Vec<MiscItem>, AppError> {
        MiscItemRepository::new(self.db).get_by_month(month).await
    }

    pub async fn create_misc_item(
        &self,
        param: UpsertMiscItemParam,
        user_id: &str,
    ) -> Result<MiscItem, AppError> {
        MiscItemRepository::new(self.db).create(param, user_id).await
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No misc item with that ID
    pub async fn update_misc_item(
        &self,
        item_id: &str,
        param: UpsertMiscItemParam,
    ) -> Result<MiscItem, AppError> {
        MiscItemRepository::new(self.db)
            .update(item_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Misc item not found".to_string()))
    }

    pub async fn delete_misc_item(&self, item_id: &str) -> Result<(), AppError> {
        if !MiscItemRepository::new(self.db).delete(item_id).await? {
            return Err(AppError::NotFound("Misc item not found".to_string()));
        }

        Ok(())
    }

    /// Lists important uploads, most recent first.
    pub async fn list_important_uploads(&self) -> Result<Vec<ImportantUpload>, AppError> {
        Ok(ImportantUploadRepository::new(self.db).get_all().await?)
    }

    pub async fn create_important_upload(
        &self,
        param: CreateImportantUploadParam,
    ) -> Result<ImportantUpload, AppError> {
        Ok(ImportantUploadRepository::new(self.db).create(param).await?)
    }

    pub async fn delete_important_upload(&self, upload_id: &str) -> Result<(), AppError> {
        if !ImportantUploadRepository::new(self.db)
            .delete(upload_id)
            .await?
        {
            return Err(AppError::NotFound("Important upload not found".to_string()));
        }

        Ok(())
    }
}
