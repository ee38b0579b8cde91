use aidconnect_core::{AppError, ErrorResponse};
use aidconnect_models::{
    AidRequest, CreateAidRequestDto, ItemQuantityResponse, PaginatedRequestsResponse,
    RequestFilterParams, RequestId, UpdateItemQuantityDto,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::requests::service::RequestService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateAidRequestDto,
    responses(
        (status = 201, description = "Aid request submitted", body = AidRequest),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Requests"
)]
#[instrument(skip(state, dto))]
pub async fn create_request(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAidRequestDto>,
) -> Result<(StatusCode, Json<AidRequest>), AppError> {
    let request = RequestService::create_request(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

#[utoipa::path(
    get,
    path = "/api/requests",
    params(
        ("nic" = Option<String>, Query, description = "Identity, matched ignoring case"),
        ("location" = Option<String>, Query, description = "Exact \"District - Region\" location"),
        ("status" = Option<String>, Query, description = "Pending, Partially Fulfilled or Fulfilled"),
        ("active_only" = Option<bool>, Query, description = "Exclude fulfilled requests"),
        ("limit" = Option<i64>, Query, description = "Page size (1-100, default 10)"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("page" = Option<i64>, Query, description = "1-indexed page, overrides offset")
    ),
    responses(
        (status = 200, description = "Requests, newest first", body = PaginatedRequestsResponse),
        (status = 400, description = "Invalid filter", body = ErrorResponse)
    ),
    tag = "Requests"
)]
#[instrument(skip(state))]
pub async fn list_requests(
    State(state): State<AppState>,
    Query(filters): Query<RequestFilterParams>,
) -> Result<Json<PaginatedRequestsResponse>, AppError> {
    let requests = RequestService::list_requests(&state.db, filters).await?;
    Ok(Json(requests))
}

#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Aid request", body = AidRequest),
        (status = 404, description = "Aid request not found", body = ErrorResponse)
    ),
    tag = "Requests"
)]
#[instrument(skip(state))]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AidRequest>, AppError> {
    let request = RequestService::get_request(&state.db, RequestId::from(id)).await?;
    Ok(Json(request))
}

#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 204, description = "Aid request deleted"),
        (status = 404, description = "Aid request not found", body = ErrorResponse)
    ),
    tag = "Requests"
)]
#[instrument(skip(state))]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    RequestService::delete_request(&state.db, RequestId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// "My status" lookup. Any non-blank identity is accepted so requests filed
/// before format checks existed still resolve.
#[utoipa::path(
    get,
    path = "/api/requests/by-nic/{nic}",
    params(("nic" = String, Path, description = "Beneficiary identity")),
    responses(
        (status = 200, description = "Requests filed under this identity, newest first", body = Vec<AidRequest>),
        (status = 400, description = "Blank identity", body = ErrorResponse)
    ),
    tag = "Requests"
)]
#[instrument(skip(state))]
pub async fn get_requests_by_nic(
    State(state): State<AppState>,
    Path(nic): Path<String>,
) -> Result<Json<Vec<AidRequest>>, AppError> {
    if nic.trim().is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!("NIC is required")));
    }

    let requests = RequestService::find_requests_by_identity(&state.db, &nic).await?;
    Ok(Json(requests))
}

#[utoipa::path(
    patch,
    path = "/api/requests/{id}/items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Request ID"),
        ("item_id" = String, Path, description = "Item ID within the request")
    ),
    request_body = UpdateItemQuantityDto,
    responses(
        (status = 200, description = "Quantity stored (clamped) and status re-derived", body = ItemQuantityResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Request or item not found", body = ErrorResponse)
    ),
    tag = "Requests"
)]
#[instrument(skip(state, dto))]
pub async fn update_item_quantity(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, String)>,
    Json(dto): Json<UpdateItemQuantityDto>,
) -> Result<Json<ItemQuantityResponse>, AppError> {
    let response =
        RequestService::update_item_quantity(&state.db, RequestId::from(id), &item_id, dto)
            .await?;
    Ok(Json(response))
}
