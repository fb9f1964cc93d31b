//! Authentication service.
//!
//! Registration, login and password changes for username/password accounts. Tokens
//! are issued by [`token::TokenService`] and passwords hashed with [`password`].

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{ChangePasswordParam, RegisterUserParam, User},
};

pub mod password;
pub mod token;

use password::{hash_password, verify_password, verify_unknown_user};
use token::TokenService;

/// Service for credential checks and token issuing.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::InternalErr)` - Hashing failed
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict("Username already registered".to_string()));
        }

        let hash = hash_password(&param.password)?;
        let user = repo.create(param.username, hash, param.role).await?;

        tracing::info!("Registered user {} with role {}", user.username, user.role);

        Ok(user)
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error after the same
    /// Argon2 work. The username is trimmed like at registration.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username.trim()).await? else {
            verify_unknown_user(password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;

        Ok((token, user))
    }

    /// Resolves a bearer token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and user still exists
    /// - `Err(AppError::AuthErr(InvalidToken))` - Signature or expiry check failed
    /// - `Err(AppError::AuthErr(UserNotFound))` - User was deleted after issuing
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;

        UserRepository::new(self.db)
            .find_by_id(&claims.user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(claims.user_id).into())
    }

    /// Changes a user's password after checking the old one.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - Old password is wrong
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn change_password(&self, param: ChangePasswordParam) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(&param.user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(&param.old_password, &user.password_hash)? {
            return Err(AppError::BadRequest("Current password is incorrect".to_string()));
        }

        let hash = hash_password(&param.new_password)?;
        repo.update_password_hash(&user.id, &hash).await?;

        Ok(())
    }
}
