//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the user ID, username and role, with an expiry set
//! from the configured lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::user::User,
    },
};

/// Payload of an issued token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub user_id: String,
    pub username: String,
    pub role: Role,
    /// Issued at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies bearer tokens with a shared secret.
///
/// Built once from config and shared through `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used to sign and verify
    /// - `ttl_hours` - Token lifetime in hours
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Signs a token for the given user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr(TokenEncode))` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| InternalError::TokenEncode(e).into())
    }

    /// Verifies signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad signature, malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            username: "anna".to_string(),
            password_hash: String::new(),
            role: Role::Admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let tokens = TokenService::new("secret", 24);

        let claims = tokens.verify(&tokens.issue(&user()).unwrap()).unwrap();

        assert_eq!(claims.user_id, "u-1");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("secret", 24).issue(&user()).unwrap();

        let result = TokenService::new("other", 24).verify(&token);

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        // Past the default 60 second validation leeway.
        let tokens = TokenService::new("secret", -2);

        let result = tokens.verify(&tokens.issue(&user()).unwrap());

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    #[test]
    fn rejects_garbage() {
        let tokens = TokenService::new("secret", 24);

        assert!(tokens.verify("not.a.token").is_err());
    }
}
