//! User administration service.
//!
//! Listing and deleting users is admin-only; access is checked in the controller.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all users ordered by username.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all().await
    }

    /// Deletes a user on behalf of an admin.
    ///
    /// # Arguments
    /// - `acting_user_id` - ID of the admin performing the delete
    /// - `user_id` - ID of the user to delete
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Admin tried to delete their own account
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, acting_user_id: &str, user_id: &str) -> Result<(), AppError> {
        if acting_user_id == user_id {
            return Err(AppError::BadRequest("Cannot delete yourself".to_string()));
        }

        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deleted by {}", user_id, acting_user_id);

        Ok(())
    }
}
