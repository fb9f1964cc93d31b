use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, UploadDto},
        transaction::{TransactionDto, UpsertTransactionDto},
    },
    server::{
        controller::file::attach_upload,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{
            attachment::AttachmentOwner,
            transaction::{TransactionFilter, UpsertTransactionParam},
        },
        service::transaction::TransactionService,
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

#[derive(Deserialize)]
pub struct TransactionQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// List transactions.
///
/// Ordered by date, newest first. `month` narrows a `year` filter and is rejected
/// without one.
///
/// # Returns
/// - `200 OK` - Matching transactions with account names
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Month without year or out of range
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    params(
        ("year" = Option<i32>, Query, description = "Limit to this year"),
        ("month" = Option<u32>, Query, description = "Limit to this month of `year` (1-12)")
    ),
    responses(
        (status = 200, description = "Transactions, newest first", body = Vec<TransactionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid period filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<TransactionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let filter = TransactionFilter::from_query(query.year, query.month)?;
    let transactions = TransactionService::new(&state.db).list(filter).await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(|t| t.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{transaction_id}",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "The transaction", body = TransactionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let transaction = TransactionService::new(&state.db)
        .get(&transaction_id)
        .await?;

    Ok(Json(transaction.into_dto()))
}

/// Book a transaction.
///
/// The booking user is recorded as the creator. The referenced account must exist.
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = UpsertTransactionDto,
    responses(
        (status = 201, description = "Transaction created", body = TransactionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid amount or unknown account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<UpsertTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertTransactionParam::from_dto(payload)?;
    let transaction = TransactionService::new(&state.db)
        .create(param, &user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Replace a transaction's fields.
///
/// Any authenticated user may edit any transaction.
#[utoipa::path(
    put,
    path = "/api/transactions/{transaction_id}",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    request_body = UpsertTransactionDto,
    responses(
        (status = 200, description = "Transaction updated", body = TransactionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 422, description = "Invalid amount or unknown account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(transaction_id): Path<String>,
    Json(payload): Json<UpsertTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertTransactionParam::from_dto(payload)?;
    let transaction = TransactionService::new(&state.db)
        .update(&transaction_id, param)
        .await?;

    Ok(Json(transaction.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{transaction_id}",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    TransactionService::new(&state.db)
        .delete(&transaction_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach a receipt to a transaction.
///
/// Also served at the legacy path `/api/upload/{transaction_id}`.
#[utoipa::path(
    post,
    path = "/api/transactions/{transaction_id}/upload",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_transaction_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(transaction_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(
        &state,
        &bearer,
        AttachmentOwner::Transaction,
        &transaction_id,
        multipart,
    )
    .await
}
