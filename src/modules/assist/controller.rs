use aidconnect_core::{AppError, ErrorResponse};
use aidconnect_models::{
    ExtractTextDto, KeywordSuggestionDto, KeywordSuggestionResponse, SmartFillResponse,
};
use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::assist::service::AssistService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/assist/extract",
    request_body = ExtractTextDto,
    responses(
        (status = 200, description = "Partially filled request for review", body = SmartFillResponse),
        (status = 422, description = "Text is empty or too long", body = ErrorResponse),
        (status = 429, description = "Too many requests"),
        (status = 502, description = "The AI assistant is unavailable or returned an unusable answer", body = ErrorResponse)
    ),
    tag = "Assist"
)]
#[instrument(skip(state, dto))]
pub async fn extract_request(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ExtractTextDto>,
) -> Result<Json<SmartFillResponse>, AppError> {
    let response = AssistService::extract_request(state.assistant.as_ref(), &dto.text).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/assist/keywords",
    request_body = KeywordSuggestionDto,
    responses(
        (status = 200, description = "Suggested keywords, empty when the assistant is unavailable", body = KeywordSuggestionResponse),
        (status = 422, description = "Invalid item name", body = ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Assist"
)]
#[instrument(skip(state))]
pub async fn suggest_keywords(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<KeywordSuggestionDto>,
) -> Result<Json<KeywordSuggestionResponse>, AppError> {
    let response =
        AssistService::suggest_keywords(state.assistant.as_ref(), &dto.name, dto.category).await;
    Ok(Json(response))
}
