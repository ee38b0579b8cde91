use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::rate_limit::IpGovernorConfig;
use crate::docs::ApiDoc;
use crate::logging::{REQUEST_ID_HEADER, logging_middleware};
use crate::metrics::metrics_middleware;
use crate::modules::assist::init_assist_router;
use crate::modules::dashboard::init_dashboard_router;
use crate::modules::locations::init_locations_router;
use crate::modules::requests::init_requests_router;
use crate::state::AppState;

/// Wraps `router` in a per-IP limiter and starts the task that forgets
/// idle clients.
fn rate_limited(router: Router<AppState>, config: Option<IpGovernorConfig>, name: &str) -> Router<AppState> {
    let Some(config) = config else {
        tracing::warn!(limiter = name, "Invalid rate limit settings, limiter not applied");
        return router;
    };

    let config = Arc::new(config);
    let limiter = config.limiter().clone();
    if let Ok(runtime) = tokio::runtime::Handle::try_current() {
        runtime.spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(60)).await;
                limiter.retain_recent();
            }
        });
    }

    router.layer(GovernorLayer::new(config))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([REQUEST_ID_HEADER])
}

pub fn init_router(state: AppState) -> Router {
    let rate_limit = &state.rate_limit_config;

    let mut assist = init_assist_router();
    let mut api = Router::new()
        .nest("/requests", init_requests_router())
        .nest("/dashboard", init_dashboard_router())
        .nest("/locations", init_locations_router());

    if rate_limit.enabled {
        assist = rate_limited(assist, rate_limit.assist_governor_config(), "assist");
        api = rate_limited(api, rate_limit.general_governor_config(), "general");
    }

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", api.nest("/assist", assist))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
