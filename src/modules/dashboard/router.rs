use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{compute_stats, get_dashboard, get_ignored_keywords, get_situation_report};

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/ignored-keywords", get(get_ignored_keywords))
        .route("/stats", post(compute_stats))
        .route("/report", post(get_situation_report))
}
