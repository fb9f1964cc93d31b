use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{ChangePasswordDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::user::ChangePasswordParam,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users ordered by username", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).list().await?;

    Ok(Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()))
}

/// Delete a user.
///
/// Admins cannot delete their own account.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Admin attempted to delete themselves", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(&admin.id, &user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change the current user's password.
#[utoipa::path(
    post,
    path = "/api/users/change-password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Current password is incorrect", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "New password too short", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = ChangePasswordParam::from_dto(user.id, payload)?;
    AuthService::new(&state.db, &state.tokens)
        .change_password(param)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
