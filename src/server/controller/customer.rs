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
        customer::{CreateCustomerRemarkDto, CustomerDto, CustomerRemarkDto, UpsertCustomerDto},
    },
    server::{
        controller::file::attach_upload,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{
            attachment::AttachmentOwner,
            customer::{CreateCustomerRemarkParam, UpsertCustomerParam},
        },
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

#[derive(Deserialize)]
pub struct CustomerQuery {
    pub active: Option<bool>,
}

/// List customers ordered by last name, then first name.
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(("active" = Option<bool>, Query, description = "Only customers with this active flag")),
    responses(
        (status = 200, description = "Customers", body = Vec<CustomerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<CustomerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let customers = CustomerService::new(&state.db).list(query.active).await?;

    Ok(Json(
        customers.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "The customer", body = CustomerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let customer = CustomerService::new(&state.db).get(&customer_id).await?;

    Ok(Json(customer.into_dto()))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = UpsertCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<UpsertCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let customer = CustomerService::new(&state.db)
        .create(UpsertCustomerParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = String, Path, description = "Customer ID")),
    request_body = UpsertCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(customer_id): Path<String>,
    Json(payload): Json<UpsertCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let customer = CustomerService::new(&state.db)
        .update(&customer_id, UpsertCustomerParam::from(payload))
        .await?;

    Ok(Json(customer.into_dto()))
}

/// Delete a customer together with their remarks.
#[utoipa::path(
    delete,
    path = "/api/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = String, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    CustomerService::new(&state.db).delete(&customer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/customers/{customer_id}/remarks",
    tag = CUSTOMER_TAG,
    params(("customer_id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Remarks, newest first", body = Vec<CustomerRemarkDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_customer_remarks(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let remarks = CustomerService::new(&state.db)
        .list_remarks(&customer_id)
        .await?;

    Ok(Json(
        remarks.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/customers/{customer_id}/remarks",
    tag = CUSTOMER_TAG,
    params(("customer_id" = String, Path, description = "Customer ID")),
    request_body = CreateCustomerRemarkDto,
    responses(
        (status = 201, description = "Remark created", body = CustomerRemarkDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_customer_remark(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(customer_id): Path<String>,
    Json(payload): Json<CreateCustomerRemarkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = CreateCustomerRemarkParam::from_dto(customer_id, user.id, payload);
    let remark = CustomerService::new(&state.db).add_remark(param).await?;

    Ok((StatusCode::CREATED, Json(remark.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/customer-remarks/{remark_id}",
    tag = CUSTOMER_TAG,
    params(("remark_id" = String, Path, description = "Customer remark ID")),
    responses(
        (status = 204, description = "Remark deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Remark not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_customer_remark(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(remark_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    CustomerService::new(&state.db)
        .delete_remark(&remark_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/customer-remarks/{remark_id}/upload",
    tag = CUSTOMER_TAG,
    params(("remark_id" = String, Path, description = "Customer remark ID")),
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Remark not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_customer_remark_file(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(remark_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    attach_upload(&state, &bearer, AttachmentOwner::CustomerRemark, &remark_id, multipart).await
}
