#![allow(dead_code)]

use std::sync::Arc;

use aidconnect::ai::testing::StubAssistant;
use aidconnect::ai::{AidAssistant, DisabledAssistant};
use aidconnect::config::cors::CorsConfig;
use aidconnect::config::dashboard::DashboardConfig;
use aidconnect::config::rate_limit::RateLimitConfig;
use aidconnect::modules::requests::RequestService;
use aidconnect::router::init_router;
use aidconnect::state::AppState;
use aidconnect_models::{AidCategory, AidItem, AidRequest, RequestId, RequestStatus};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

pub fn test_state(pool: PgPool, assistant: Arc<dyn AidAssistant>) -> AppState {
    AppState {
        db: pool,
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        rate_limit_config: RateLimitConfig::disabled(),
        dashboard_config: DashboardConfig::default(),
        assistant,
    }
}

/// Router with rate limiting off and the assistant disabled.
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool, Arc::new(DisabledAssistant)))
}

pub fn setup_test_app_with_assistant(pool: PgPool, assistant: StubAssistant) -> axum::Router {
    init_router(test_state(pool, Arc::new(assistant)))
}

pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn patch(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PATCH", uri, Some(body)).await
}

/// A valid submission body with one item per `(name, category, needed)`.
pub fn submission(nic: &str, district: &str, region: &str, items: &[(&str, &str, u32)]) -> Value {
    json!({
        "full_name": "Test Beneficiary",
        "nic": nic,
        "contact_number": "0771234567",
        "district": district,
        "region": region,
        "items": items
            .iter()
            .map(|(name, category, needed)| json!({
                "name": name,
                "category": category,
                "quantity_needed": needed,
                "unit": "units",
                "keywords": [name.to_lowercase()]
            }))
            .collect::<Vec<_>>()
    })
}

pub fn item(id: &str, category: AidCategory, needed: u32, received: u32, keywords: &[&str]) -> AidItem {
    AidItem {
        id: id.to_string(),
        name: id.to_string(),
        category,
        quantity_needed: needed,
        quantity_received: received,
        unit: "units".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

pub fn stored_request(
    id: u128,
    nic: &str,
    location: &str,
    status: RequestStatus,
    created_at: i64,
    items: Vec<AidItem>,
) -> AidRequest {
    AidRequest {
        id: RequestId::from_u128(id),
        nic: nic.to_string(),
        full_name: "Stored Beneficiary".to_string(),
        contact_number: "0771234567".to_string(),
        extra_contact_number: None,
        location: location.to_string(),
        items,
        status,
        notes: None,
        created_at,
        updated_at: created_at,
    }
}

/// Writes a request straight to the store, bypassing validation.
pub async fn insert_request(pool: &PgPool, request: &AidRequest) {
    RequestService::persist_request(pool, request).await.unwrap();
}
