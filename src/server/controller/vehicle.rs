use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UploadDto},
        vehicle::{ServiceEntryDto, UpsertServiceEntryDto, UpsertVehicleDto, VehicleDto},
    },
    server::{
        controller::file::attach_upload,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{
            attachment::AttachmentOwner,
            vehicle::{UpsertServiceEntryParam, UpsertVehicleParam},
        },
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Vehicles ordered by make and model", body = Vec<VehicleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let vehicles = VehicleService::new(&state.db).list().await?;

    Ok(Json(
        vehicles.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let vehicle = VehicleService::new(&state.db).get(&vehicle_id).await?;

    Ok(Json(vehicle.into_dto()))
}

#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = UpsertVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid vehicle data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<UpsertVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertVehicleParam::from_dto(payload)?;
    let vehicle = VehicleService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    request_body = UpsertVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 422, description = "Invalid vehicle data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(vehicle_id): Path<String>,
    Json(payload): Json<UpsertVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertVehicleParam::from_dto(payload)?;
    let vehicle = VehicleService::new(&state.db)
        .update(&vehicle_id, param)
        .await?;

    Ok(Json(vehicle.into_dto()))
}

/// Delete a vehicle together with its service log.
#[utoipa::path(
    delete,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    VehicleService::new(&state.db).delete(&vehicle_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach the vehicle registration document.
#[utoipa::path(
    post,
    path = "/api/vehicles/{vehicle_id}/upload",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_vehicle_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(vehicle_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(&state, &bearer, AttachmentOwner::Vehicle, &vehicle_id, multipart).await
}

/// List a vehicle's service log, most recent first.
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}/services",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Service entries, newest first", body = Vec<ServiceEntryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_service_entries(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let entries = VehicleService::new(&state.db)
        .list_service_entries(&vehicle_id)
        .await?;

    Ok(Json(
        entries.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/vehicles/{vehicle_id}/services",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = String, Path, description = "Vehicle ID")),
    request_body = UpsertServiceEntryDto,
    responses(
        (status = 201, description = "Service entry created", body = ServiceEntryDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 422, description = "Invalid service entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_service_entry(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(vehicle_id): Path<String>,
    Json(payload): Json<UpsertServiceEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertServiceEntryParam::from_dto(payload)?;
    let entry = VehicleService::new(&state.db)
        .add_service_entry(&vehicle_id, param, &user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/services/{entry_id}",
    tag = VEHICLE_TAG,
    params(("entry_id" = String, Path, description = "Service entry ID")),
    request_body = UpsertServiceEntryDto,
    responses(
        (status = 200, description = "Service entry updated", body = ServiceEntryDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service entry not found", body = ErrorDto),
        (status = 422, description = "Invalid service entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_service_entry(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(entry_id): Path<String>,
    Json(payload): Json<UpsertServiceEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = UpsertServiceEntryParam::from_dto(payload)?;
    let entry = VehicleService::new(&state.db)
        .update_service_entry(&entry_id, param)
        .await?;

    Ok(Json(entry.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/services/{entry_id}",
    tag = VEHICLE_TAG,
    params(("entry_id" = String, Path, description = "Service entry ID")),
    responses(
        (status = 204, description = "Service entry deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_service_entry(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(entry_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    VehicleService::new(&state.db)
        .delete_service_entry(&entry_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/services/{entry_id}/upload",
    tag = VEHICLE_TAG,
    params(("entry_id" = String, Path, description = "Service entry ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_service_entry_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(entry_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(&state, &bearer, AttachmentOwner::ServiceEntry, &entry_id, multipart).await
}
