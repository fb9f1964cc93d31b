//! User factory for creating test user entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The stored password hash is a placeholder and will not verify against any
/// password. Tests that exercise login should register users through the auth
/// service instead.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db).username("chef").admin(true).build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{n}"` where n is auto-incremented
    /// - password_hash: `"not-a-real-hash"`
    /// - role: `"user"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password_hash: "not-a-real-hash".to_string(),
            role: "user".to_string(),
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets a precomputed password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role to `admin` when true, `user` otherwise.
    pub fn admin(mut self, admin: bool) -> Self {
        self.role = if admin { "admin" } else { "user" }.to_string();
        self
    }

    /// Sets a raw role string, used to simulate corrupted rows.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular (non-admin) user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
