use aidconnect_core::{AppError, ErrorResponse};
use aidconnect_models::{
    DashboardParams, DashboardStats, DashboardStatsRequest, IgnoredKeywordsResponse,
    SituationReportResponse,
};
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::modules::dashboard::service::DashboardService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(
        ("filter_generic" = Option<bool>, Query, description = "Also drop keywords the assistant classifies as generic (default true)")
    ),
    responses(
        (status = 200, description = "Aggregated needs across all requests", body = DashboardStats),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = DashboardService::get_dashboard(
        &state.db,
        &state.dashboard_config,
        state.assistant.as_ref(),
        params.filter_generic(),
    )
    .await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/ignored-keywords",
    params(
        ("filter_generic" = Option<bool>, Query, description = "Include the assistant's generic keyword classification (default true)")
    ),
    responses(
        (status = 200, description = "Keywords excluded from keyword stats", body = IgnoredKeywordsResponse)
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_ignored_keywords(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<IgnoredKeywordsResponse>, AppError> {
    let ignored = DashboardService::get_ignored_keywords(
        &state.db,
        &state.dashboard_config,
        state.assistant.as_ref(),
        params.filter_generic(),
    )
    .await?;
    Ok(Json(ignored))
}

#[utoipa::path(
    post,
    path = "/api/dashboard/stats",
    request_body = DashboardStatsRequest,
    responses(
        (status = 200, description = "Aggregated needs using the supplied ignore list", body = DashboardStats),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state, body))]
pub async fn compute_stats(
    State(state): State<AppState>,
    Json(body): Json<DashboardStatsRequest>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = DashboardService::compute_stats(&state.db, &body.ignored_keywords).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    post,
    path = "/api/dashboard/report",
    responses(
        (status = 200, description = "Situation report, or the fallback text when the assistant is unavailable", body = SituationReportResponse)
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_situation_report(
    State(state): State<AppState>,
) -> Result<Json<SituationReportResponse>, AppError> {
    let report = DashboardService::situation_report(&state.db, state.assistant.as_ref()).await?;
    Ok(Json(report))
}
