// src/presentation/http/controllers/dashboard.rs
use crate::application::dto::{DashboardDto, DashboardStatisticsDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Caller's profile, statistics, recent posts and blogs.", body = DashboardDto),
        (status = 401, description = "Missing identity.", body = ErrorResponse),
        (status = 404, description = "Unknown user.", body = ErrorResponse)
    ),
    security(("userId" = [])),
    tag = "Dashboard"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardDto>> {
    let dashboard = state
        .services
        .dashboard_queries
        .user_dashboard(&user)
        .await
        .into_http()?;
    Ok(Json(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/statistics",
    responses(
        (status = 200, description = "Caller's aggregate statistics.", body = DashboardStatisticsDto),
        (status = 401, description = "Missing identity.", body = ErrorResponse),
        (status = 404, description = "Unknown user.", body = ErrorResponse)
    ),
    security(("userId" = [])),
    tag = "Dashboard"
)]
pub async fn statistics(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardStatisticsDto>> {
    let statistics = state
        .services
        .dashboard_queries
        .user_statistics(&user)
        .await
        .into_http()?;
    Ok(Json(statistics))
}
