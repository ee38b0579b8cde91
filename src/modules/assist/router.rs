use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{extract_request, suggest_keywords};

pub fn init_assist_router() -> Router<AppState> {
    Router::new()
        .route("/extract", post(extract_request))
        .route("/keywords", post(suggest_keywords))
}
