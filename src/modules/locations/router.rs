use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_locations;

pub fn init_locations_router() -> Router<AppState> {
    Router::new().route("/", get(get_locations))
}
