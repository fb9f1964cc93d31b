//! User domain models and parameters.
//!
//! Provides the domain model for application users with their role, plus parameter
//! types for registration and password changes.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{ChangePasswordDto, RegisterDto, Role, UserDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Application user with credentials and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Opaque user ID.
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Argon2 PHC string, never exposed through the API.
    pub password_hash: String,
    /// Whether the user is an admin or a regular user.
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_stored("user", "role", &entity.role)?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            role,
            created_at: entity.created_at,
        })
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl RegisterUserParam {
    /// Converts and validates a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Username is non-blank and password long enough
    /// - `Err(AppError::Validation)` - Blank username or short password
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let username = dto.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::Validation("Username must not be empty".to_string()));
        }
        validate_password(&dto.password)?;

        Ok(Self {
            username,
            password: dto.password,
            role: dto.role,
        })
    }
}

/// Parameters for changing the current user's password.
#[derive(Debug, Clone)]
pub struct ChangePasswordParam {
    pub user_id: String,
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordParam {
    /// # Returns
    /// - `Err(AppError::Validation)` - New password is too short
    pub fn from_dto(user_id: String, dto: ChangePasswordDto) -> Result<Self, AppError> {
        validate_password(&dto.new_password)?;

        Ok(Self {
            user_id,
            old_password: dto.old_password,
            new_password: dto.new_password,
        })
    }
}
