//! File attachment service.
//!
//! Stores uploaded files flat in the upload directory and links them to their owning
//! record through its `file_url` column. Replacing a file leaves the previous one on
//! disk.

use std::path::Path;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        bank_document::BankDocumentRepository, customer_remark::CustomerRemarkRepository,
        important_upload::ImportantUploadRepository, misc_item::MiscItemRepository,
        service_entry::ServiceEntryRepository, transaction::TransactionRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::attachment::{
        content_type_for, file_url, is_safe_file_name, stored_file_name, AttachmentOwner,
        StoredFile, UploadedFile,
    },
};

pub struct AttachmentService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> AttachmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Writes an uploaded file and records its URL on the owner.
    ///
    /// The owner is checked before anything is written.
    ///
    /// # Returns
    /// - `Ok(String)` - URL the file is served from
    /// - `Err(AppError::NotFound)` - Owner record does not exist
    /// - `Err(AppError::IoErr)` - Writing the file failed
    pub async fn attach(
        &self,
        owner: AttachmentOwner,
        owner_id: &str,
        file: UploadedFile,
    ) -> Result<String, AppError> {
        if !self.owner_exists(owner, owner_id).await? {
            return Err(AppError::NotFound(format!("{} not found", owner.label())));
        }

        let name = stored_file_name(owner, owner_id, file.file_name.as_deref());
        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&name), &file.bytes).await?;

        let url = file_url(&name);
        self.set_file_url(owner, owner_id, &url).await?;

        tracing::debug!(
            "Stored {} bytes for {} {} as {}",
            file.bytes.len(),
            owner.prefix(),
            owner_id,
            name
        );

        Ok(url)
    }

    /// Reads a stored file by name.
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - File contents with content type
    /// - `Err(AppError::NotFound)` - Unsafe name or no such file
    pub async fn retrieve(&self, name: &str) -> Result<StoredFile, AppError> {
        if !is_safe_file_name(name) {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        match tokio::fs::read(self.upload_dir.join(name)).await {
            Ok(bytes) => Ok(StoredFile {
                content_type: content_type_for(name),
                bytes,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("File not found".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn owner_exists(&self, owner: AttachmentOwner, id: &str) -> Result<bool, DbErr> {
        match owner {
            AttachmentOwner::Transaction => TransactionRepository::new(self.db).exists(id).await,
            AttachmentOwner::BankDocument => BankDocumentRepository::new(self.db).exists(id).await,
            AttachmentOwner::MiscItem => MiscItemRepository::new(self.db).exists(id).await,
            AttachmentOwner::ImportantUpload => {
                ImportantUploadRepository::new(self.db).exists(id).await
            }
            AttachmentOwner::ServiceEntry => ServiceEntryRepository::new(self.db).exists(id).await,
            AttachmentOwner::CustomerRemark => {
                CustomerRemarkRepository::new(self.db).exists(id).await
            }
            AttachmentOwner::Vehicle => VehicleRepository::new(self.db).exists(id).await,
        }
    }

    async fn set_file_url(
        &self,
        owner: AttachmentOwner,
        id: &str,
        url: &str,
    ) -> Result<bool, DbErr> {
        match owner {
            AttachmentOwner::Transaction => {
                TransactionRepository::new(self.db).set_file_url(id, url).await
            }
            AttachmentOwner::BankDocument => {
                BankDocumentRepository::new(self.db).set_file_url(id, url).await
            }
            AttachmentOwner::MiscItem => MiscItemRepository::new(self.db).set_file_url(id, url).await,
            AttachmentOwner::ImportantUpload => {
                ImportantUploadRepository::new(self.db)
                    .set_file_url(id, url)
                    .await
            }
            AttachmentOwner::ServiceEntry => {
                ServiceEntryRepository::new(self.db).set_file_url(id, url).await
            }
            AttachmentOwner::CustomerRemark => {
                CustomerRemarkRepository::new(self.db)
                    .set_file_url(id, url)
                    .await
            }
            AttachmentOwner::Vehicle => VehicleRepository::new(self.db).set_file_url(id, url).await,
        }
    }
}
