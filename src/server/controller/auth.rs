use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::user::RegisterUserParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Open for both roles; `role` defaults to `user`.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The created user
/// - `409 Conflict` - Username already registered
/// - `422 Unprocessable Entity` - Blank username or password too short
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 409, description = "Username already registered", body = ErrorDto),
        (status = 422, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;
    let user = AuthService::new(&state.db, &state.tokens)
        .register(param)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - Bearer token and the logged in user
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenDto {
        token,
        user: user.into_dto(),
    }))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    Ok(Json(user.into_dto()))
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::{model::auth::Role, server::config::Config};

    fn state(db: &sea_orm::DatabaseConnection) -> Result<AppState, AppError> {
        let config = Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "JWT_SECRET" => Some("test-secret".to_string()),
            _ => None,
        })?;

        Ok(AppState::new(db.clone(), &config))
    }

    /// Tests registering an admin without any token, then logging in.
    ///
    /// Expected: 201 on register, login body `{token, user}` with role `admin`
    #[tokio::test]
    async fn admin_registers_without_token_and_logs_in() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let state = state(db)?;

        let response = register(
            State(state.clone()),
            Json(RegisterDto {
                username: "chefin".to_string(),
                password: "geheim123".to_string(),
                role: Role::Admin,
            }),
        )
        .await?
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = login(
            State(state),
            Json(LoginDto {
                username: "chefin".to_string(),
                password: "geheim123".to_string(),
            }),
        )
        .await?
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(value["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(value["user"]["role"], "admin");
        assert!(value.get("access_token").is_none());

        Ok(())
    }
}
