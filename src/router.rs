use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::compliance::{Bill, BillComplianceView, DashboardStats};
use crate::report::{select_diff_pair, DiffCandidates, DiffReport, Interval};

/// Shared state for the HTTP surface.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: PrometheusHandle,
    pub default_interval: Interval,
}

/// Build the dashboard router. All domain endpoints are thin: deserialize,
/// call the pure core, serialize.
pub fn dashboard_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/bills/classify", post(classify_endpoint))
        .route("/api/v1/bills/stats", post(stats_endpoint))
        .route("/api/v1/scan-metadata/resolve", post(resolve_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn classify_endpoint(Json(bill): Json<Bill>) -> Json<BillComplianceView> {
    Json(BillComplianceView::for_bill(&bill))
}

pub(crate) async fn stats_endpoint(Json(bills): Json<Vec<Bill>>) -> Json<DashboardStats> {
    Json(DashboardStats::from_bills(&bills))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolveRequest {
    #[serde(default)]
    pub(crate) candidates: DiffCandidates,
    #[serde(default)]
    pub(crate) interval: Option<Interval>,
}

/// Both fields are populated together or both are null; the dashboard renders
/// nothing on nulls rather than a placeholder.
#[derive(Debug, Serialize)]
pub(crate) struct ResolveResponse {
    pub(crate) diff_report: Option<DiffReport>,
    pub(crate) analysis: Option<String>,
}

async fn resolve_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Json<ResolveResponse> {
    let interval = request.interval.unwrap_or(state.default_interval);
    Json(resolve_response(&request.candidates, interval))
}

pub(crate) fn resolve_response(candidates: &DiffCandidates, interval: Interval) -> ResolveResponse {
    match select_diff_pair(candidates, interval) {
        Some(pair) => ResolveResponse {
            diff_report: Some(pair.report),
            analysis: Some(pair.analysis),
        },
        None => ResolveResponse {
            diff_report: None,
            analysis: None,
        },
    }
}
