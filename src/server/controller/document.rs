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
        document::{
            BankDocumentDto, CreateBankDocumentDto, CreateImportantUploadDto, ImportantUploadDto,
            MiscItemDto, UpsertMiscItemDto,
        },
    },
    server::{
        controller::file::attach_upload,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{
            attachment::AttachmentOwner,
            document::{CreateBankDocumentParam, CreateImportantUploadParam, UpsertMiscItemParam},
            period::YearMonth,
        },
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

#[derive(Deserialize)]
pub struct MonthQuery {
    /// `YYYY-MM`
    pub month: String,
}

/// List bank documents filed under a month, most recent first.
#[utoipa::path(
    get,
    path = "/api/bank-documents",
    tag = DOCUMENT_TAG,
    params(("month" = String, Query, description = "Filing month as YYYY-MM")),
    responses(
        (status = 200, description = "Bank documents", body = Vec<BankDocumentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Malformed month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bank_documents(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let month = YearMonth::parse(&query.month)?;
    let documents = DocumentService::new(&state.db)
        .list_bank_documents(month)
        .await?;

    Ok(Json(
        documents.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/bank-documents",
    tag = DOCUMENT_TAG,
    request_body = CreateBankDocumentDto,
    responses(
        (status = 201, description = "Bank document created", body = BankDocumentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Malformed month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_bank_document(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<CreateBankDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = CreateBankDocumentParam::from_dto(user.id, payload)?;
    let document = DocumentService::new(&state.db)
        .create_bank_document(param)
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/bank-documents/{document_id}",
    tag = DOCUMENT_TAG,
    params(("document_id" = String, Path, description = "Bank document ID")),
    responses(
        (status = 204, description = "Bank document deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Bank document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_bank_document(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    DocumentService::new(&state.db)
        .delete_bank_document(&document_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/bank-documents/{document_id}/upload",
    tag = DOCUMENT_TAG,
    params(("document_id" = String, Path, description = "Bank document ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Bank document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_bank_document_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(document_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(&state, &bearer, AttachmentOwner::BankDocument, &document_id, multipart).await
}

/// List misc items filed under a month, most recent first.
#[utoipa::path(
    get,
    path = "/api/misc-items",
    tag = DOCUMENT_TAG,
    params(("month" = String, Query, description = "Filing month as YYYY-MM")),
    responses(
        (status = 200, description = "Misc items", body = Vec<MiscItemDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Malformed month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_misc_items(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let month = YearMonth::parse(&query.month)?;
    let items = DocumentService::new(&state.db).list_misc_items(month).await?;

    Ok(Json(
        items.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/misc-items",
    tag = DOCUMENT_TAG,
    request_body = UpsertMiscItemDto,
    responses(
        (status = 201, description = "Misc item created", body = MiscItemDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Malformed month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_misc_item(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<UpsertMiscItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertMiscItemParam::from_dto(payload)?;
    let item = DocumentService::new(&state.db)
        .create_misc_item(param, &user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/misc-items/{item_id}",
    tag = DOCUMENT_TAG,
    params(("item_id" = String, Path, description = "Misc item ID")),
    request_body = UpsertMiscItemDto,
    responses(
        (status = 200, description = "Misc item updated", body = MiscItemDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Misc item not found", body = ErrorDto),
        (status = 422, description = "Malformed month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_misc_item(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(item_id): Path<String>,
    Json(payload): Json<UpsertMiscItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertMiscItemParam::from_dto(payload)?;
    let item = DocumentService::new(&state.db)
        .update_misc_item(&item_id, param)
        .await?;

    Ok(Json(item.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/misc-items/{item_id}",
    tag = DOCUMENT_TAG,
    params(("item_id" = String, Path, description = "Misc item ID")),
    responses(
        (status = 204, description = "Misc item deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Misc item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_misc_item(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    DocumentService::new(&state.db)
        .delete_misc_item(&item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/misc-items/{item_id}/upload",
    tag = DOCUMENT_TAG,
    params(("item_id" = String, Path, description = "Misc item ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Misc item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_misc_item_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(item_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(&state, &bearer, AttachmentOwner::MiscItem, &item_id, multipart).await
}

#[utoipa::path(
    get,
    path = "/api/important-uploads",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Important uploads, newest first", body = Vec<ImportantUploadDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_important_uploads(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let uploads = DocumentService::new(&state.db)
        .list_important_uploads()
        .await?;

    Ok(Json(
        uploads.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/important-uploads",
    tag = DOCUMENT_TAG,
    request_body = CreateImportantUploadDto,
    responses(
        (status = 201, description = "Important upload created", body = ImportantUploadDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_important_upload(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<CreateImportantUploadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = CreateImportantUploadParam::from_dto(user.id, payload);
    let upload = DocumentService::new(&state.db)
        .create_important_upload(param)
        .await?;

    Ok((StatusCode::CREATED, Json(upload.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/important-uploads/{upload_id}",
    tag = DOCUMENT_TAG,
    params(("upload_id" = String, Path, description = "Important upload ID")),
    responses(
        (status = 204, description = "Important upload deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Important upload not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_important_upload(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(upload_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    DocumentService::new(&state.db)
        .delete_important_upload(&upload_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/important-uploads/{upload_id}/upload",
    tag = DOCUMENT_TAG,
    params(("upload_id" = String, Path, description = "Important upload ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Important upload not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_important_upload_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(upload_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(&state, &bearer, AttachmentOwner::ImportantUpload, &upload_id, multipart).await
}
