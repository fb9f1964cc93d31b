use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, UploadDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::attachment::{AttachmentOwner, UploadedFile},
        service::attachment::AttachmentService,
        state::AppState,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "file";

/// Name of the multipart field carrying the upload.
const FILE_FIELD: &str = "file";

/// Serve a stored file.
///
/// Public so that stored URLs can be opened directly in a browser.
#[utoipa::path(
    get,
    path = "/api/files/{name}",
    tag = FILE_TAG,
    params(("name" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let file = AttachmentService::new(&state.db, &state.upload_dir)
        .retrieve(&name)
        .await?;

    Ok(([(header::CONTENT_TYPE, file.content_type)], file.bytes))
}

/// Reads the `file` field of a multipart body.
///
/// # Returns
/// - `Ok(UploadedFile)` - Field contents with the client file name
/// - `Err(AppError::BadRequest)` - No `file` field in the body
/// - `Err(AppError::MultipartErr)` - Malformed body or size limit exceeded
async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(UploadedFile {
            file_name,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}

/// Authenticates, reads the upload and attaches it to the owner record.
///
/// Shared body of every `.../upload` handler.
pub async fn attach_upload(
    state: &AppState,
    bearer: &BearerToken,
    owner: AttachmentOwner,
    owner_id: &str,
    multipart: Multipart,
) -> Result<Json<UploadDto>, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, bearer)
        .require(&[])
        .await?;

    let file = read_upload(multipart).await?;
    let file_url = AttachmentService::new(&state.db, &state.upload_dir)
        .attach(owner, owner_id, file)
        .await?;

    Ok(Json(UploadDto { file_url }))
}
