use aidconnect_models::LocationsResponse;
use axum::Json;

/// The district and region table requests are validated against.
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "Districts with their regions, every composed location and the item units", body = LocationsResponse)
    ),
    tag = "Locations"
)]
pub async fn get_locations() -> Json<LocationsResponse> {
    Json(LocationsResponse::from_table())
}
