use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        report::{StatisticsDto, YearlyReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::period::YearMonth,
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

#[derive(Deserialize)]
pub struct MonthExportQuery {
    pub year: i32,
    pub month: u32,
}

/// Yearly totals per account and per month.
///
/// `monthly_totals` always holds all twelve months of the year, zero-filled.
#[utoipa::path(
    get,
    path = "/api/reports/yearly",
    tag = REPORT_TAG,
    params(("year" = i32, Query, description = "Report year")),
    responses(
        (status = 200, description = "Yearly report", body = YearlyReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Year out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_yearly_report(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<YearQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let report = ReportService::new(&state.db)
        .yearly_report(query.year)
        .await?;

    Ok(Json(report.into_dto()))
}

/// Driving lesson figures, monthly flow and payment method totals for a year.
#[utoipa::path(
    get,
    path = "/api/reports/statistics",
    tag = REPORT_TAG,
    params(("year" = i32, Query, description = "Report year")),
    responses(
        (status = 200, description = "Statistics", body = StatisticsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Year out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<YearQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let statistics = ReportService::new(&state.db)
        .statistics(query.year)
        .await?;

    Ok(Json(statistics.into_dto()))
}

/// Export a month's transactions as a PDF table.
///
/// # Returns
/// - `200 OK` - `application/pdf` attachment named `saferide_{year}_{month}.pdf`
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Month outside 1-12 or year out of range
#[utoipa::path(
    get,
    path = "/api/reports/export-pdf",
    tag = REPORT_TAG,
    params(
        ("year" = i32, Query, description = "Export year"),
        ("month" = u32, Query, description = "Export month (1-12)")
    ),
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn export_pdf(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<MonthExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let period = YearMonth::new(query.year, query.month)?;
    let bytes = ReportService::new(&state.db)
        .export_month(period, &state.business_name)
        .await?;

    let disposition = format!(
        "attachment; filename=saferide_{}_{:02}.pdf",
        period.year(),
        period.month()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
