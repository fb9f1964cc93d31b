//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by ID and username, password updates and deletion,
//! with conversion from entity models to domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::auth::Role,
    server::{data::new_id, error::AppError, model::user::User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with an already hashed password.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    /// - `password_hash` - Argon2 PHC string
    /// - `role` - Role of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error, including a unique constraint violation
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        role: Role,
    ) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(new_id()),
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or unparseable stored role
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets all users ordered alphabetically by username.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether the initial admin account must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Replaces a user's password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash updated
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password_hash(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash.to_string()),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
