use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        account::{AccountDto, UpsertAccountDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::account::UpsertAccountParam,
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// List all accounts ordered by name.
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Accounts ordered by name", body = Vec<AccountDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let accounts = AccountService::new(&state.db).list().await?;

    Ok(Json(
        accounts.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(("account_id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "The account", body = AccountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_account(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(account_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let account = AccountService::new(&state.db).get(&account_id).await?;

    Ok(Json(account.into_dto()))
}

/// Create an account.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = UpsertAccountDto,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 422, description = "Invalid account data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_account(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<UpsertAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let param = UpsertAccountParam::from_dto(payload)?;
    let account = AccountService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Replace an account's name, type and category.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(("account_id" = String, Path, description = "Account ID")),
    request_body = UpsertAccountDto,
    responses(
        (status = 200, description = "Account updated", body = AccountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 422, description = "Invalid account data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_account(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(account_id): Path<String>,
    Json(payload): Json<UpsertAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let param = UpsertAccountParam::from_dto(payload)?;
    let account = AccountService::new(&state.db)
        .update(&account_id, param)
        .await?;

    Ok(Json(account.into_dto()))
}

/// Delete an account. Transactions booked on it are kept.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(("account_id" = String, Path, description = "Account ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(account_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    AccountService::new(&state.db).delete(&account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
