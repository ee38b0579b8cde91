//! Prometheus metrics.
//!
//! HTTP traffic is recorded by [`metrics_middleware`]; domain events by the
//! `track_*` helpers. Everything is a no-op when `OBSERVABILITY_ENABLED` is
//! `false` or `0`.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use aidconnect_models::{DashboardStats, RequestStatus};
use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
            .unwrap_or(true)
    })
}

/// Installs the Prometheus recorder and its upkeep task.
///
/// Returns `Ok(None)` when observability is disabled.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )?
        .set_buckets_for_metric(
            Matcher::Full("assistant_call_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let status = response.status().as_u16();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(start.elapsed().as_secs_f64());

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for the standalone metrics listener.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_request_created(items: usize) {
    if !is_observability_enabled() {
        return;
    }
    counter!("aid_requests_created_total").increment(1);
    histogram!("aid_request_items").record(items as f64);
}

pub fn track_request_deleted() {
    if !is_observability_enabled() {
        return;
    }
    counter!("aid_requests_deleted_total").increment(1);
}

pub fn track_item_quantity_updated(status: RequestStatus) {
    if !is_observability_enabled() {
        return;
    }
    counter!("item_quantity_updates_total", "status" => status.as_str()).increment(1);
}

/// Records one dashboard aggregation and publishes its headline counts.
pub fn track_dashboard_computed(stats: &DashboardStats) {
    if !is_observability_enabled() {
        return;
    }
    counter!("dashboard_computations_total").increment(1);
    gauge!("aid_requests_total").set(stats.total_requests as f64);
    gauge!("aid_requests_open").set(stats.pending_requests as f64);
}

pub fn track_assistant_call(operation: &'static str, success: bool, elapsed: Duration) {
    if !is_observability_enabled() {
        return;
    }
    let outcome = if success { "success" } else { "failure" };
    counter!("assistant_calls_total", "operation" => operation, "outcome" => outcome).increment(1);
    histogram!("assistant_call_duration_seconds", "operation" => operation)
        .record(elapsed.as_secs_f64());
}
