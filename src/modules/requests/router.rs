use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_request, delete_request, get_request, get_requests_by_nic, list_requests,
    update_item_quantity,
};

pub fn init_requests_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_request).get(list_requests))
        .route("/by-nic/{nic}", get(get_requests_by_nic))
        .route("/{id}", get(get_request).delete(delete_request))
        .route("/{id}/items/{item_id}", patch(update_item_quantity))
}
