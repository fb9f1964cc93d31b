use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token signature, format or expiry check failed.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is valid but its user no longer exists.
    ///
    /// # Fields
    /// - ID of the user referenced by the token
    #[error("User {0} referenced by token does not exist")]
    UserNotFound(String),

    /// Unknown username or wrong password during login.
    ///
    /// Both cases share this variant so the response does not reveal which one failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// User is authenticated but lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 Unauthorized with "Could not validate credentials"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden with "Admin access required"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                "Could not validate credentials",
            ),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Admin access required"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
