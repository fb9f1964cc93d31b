use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{token::TokenService, AuthService},
};

/// Bearer token taken from the `Authorization` header, if any.
///
/// Extraction never fails; a missing header or another auth scheme yields `None` and
/// is rejected later by [`AuthGuard`].
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    /// Parses an `Authorization` header value, either `Bearer <token>` or the bare
    /// token.
    pub fn from_header(value: &str) -> Self {
        let value = value.trim();
        let token = match value.strip_prefix("Bearer ") {
            Some(token) => token.trim(),
            None if !value.contains(char::is_whitespace) => value,
            None => "",
        };

        Self((!token.is_empty()).then(|| token.to_string()))
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default())
    }
}

pub enum Permission {
    Admin,
}

/// Resolves the request's bearer token to a user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bearer: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bearer: &'a BearerToken) -> Self {
        Self { db, tokens, bearer }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken / UserNotFound)` - Token rejected
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.bearer.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let user = AuthService::new(self.db, self.tokens)
            .authenticate(token)
            .await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
