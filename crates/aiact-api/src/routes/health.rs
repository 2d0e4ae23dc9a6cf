//! # Health Probes
//!
//! - `GET /health`          - Aggregate status with per-component checks
//! - `GET /health/detailed` - Per-service status map
//! - `GET /health/ready`    - Readiness probe
//! - `GET /health/live`     - Liveness probe

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::state::{AppState, VERSION};

pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_DEGRADED: &str = "degraded";
pub const STATUS_UNHEALTHY: &str = "unhealthy";
pub const STATUS_NOT_CONFIGURED: &str = "not_configured";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed))
        .route("/health/ready", get(ready))
        .route("/health/live", get(live))
}

/// Result of one component check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckResult {
    pub status: String,
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` when every check is healthy, otherwise `degraded`.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: f64,
    pub checks: BTreeMap<String, CheckResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProbeResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

fn check_api() -> CheckResult {
    CheckResult {
        status: STATUS_HEALTHY.to_string(),
        details: json!("API is responding"),
    }
}

fn check_analyzer(state: &AppState) -> CheckResult {
    let requirements = aiact_analyzer::catalog::all().count();
    let status = if requirements > 0 {
        STATUS_HEALTHY
    } else {
        STATUS_UNHEALTHY
    };
    CheckResult {
        status: status.to_string(),
        details: json!({
            "requirements": requirements,
            "synthesis": state.analyzer.config().synthesis.as_str(),
        }),
    }
}

fn check_metrics(state: &AppState) -> CheckResult {
    let exporting = state.config.metrics_enabled && state.metrics.is_some();
    CheckResult {
        status: STATUS_HEALTHY.to_string(),
        details: json!({ "enabled": state.config.metrics_enabled, "exporting": exporting }),
    }
}

/// GET /health - Aggregate service health.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let checks: BTreeMap<String, CheckResult> = [
        ("api", check_api()),
        ("analyzer", check_analyzer(&state)),
        ("metrics", check_metrics(&state)),
    ]
    .into_iter()
    .map(|(name, check)| (name.to_string(), check))
    .collect();

    let status = if checks.values().all(|c| c.status == STATUS_HEALTHY) {
        STATUS_HEALTHY
    } else {
        STATUS_DEGRADED
    };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        checks,
    })
}

/// GET /health/detailed - Status of each backing service.
#[utoipa::path(
    get,
    path = "/health/detailed",
    responses(
        (status = 200, description = "Per-service status", body = BTreeMap<String, ServiceStatus>),
    ),
    tag = "health"
)]
pub async fn detailed(State(state): State<AppState>) -> Json<BTreeMap<String, ServiceStatus>> {
    let analyzer = check_analyzer(&state);
    let services = BTreeMap::from([
        (
            "api".to_string(),
            ServiceStatus {
                name: "API".to_string(),
                status: STATUS_HEALTHY.to_string(),
                details: json!({ "app_name": state.config.app_name, "version": VERSION }),
            },
        ),
        (
            "analyzer".to_string(),
            ServiceStatus {
                name: "Compliance Analyzer".to_string(),
                status: analyzer.status,
                details: analyzer.details,
            },
        ),
        (
            "persistence".to_string(),
            ServiceStatus {
                name: "Report Storage".to_string(),
                status: STATUS_NOT_CONFIGURED.to_string(),
                details: json!({ "message": "Reports are returned inline and not stored" }),
            },
        ),
    ]);
    Json(services)
}

/// GET /health/ready - Ready when the analyzer rule-set is loaded.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Ready", body = ProbeResponse),
        (status = 503, description = "Not ready", body = ProbeResponse),
    ),
    tag = "health"
)]
pub async fn ready(State(state): State<AppState>) -> Response {
    let analyzer = check_analyzer(&state);
    if analyzer.status != STATUS_HEALTHY {
        tracing::warn!("readiness check failed: analyzer unavailable");
        let body = ProbeResponse {
            status: "not_ready".to_string(),
            timestamp: Utc::now(),
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
    }
    Json(ProbeResponse {
        status: "ready".to_string(),
        timestamp: Utc::now(),
    })
    .into_response()
}

/// GET /health/live - Always 200 while the process runs.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Alive", body = ProbeResponse),
    ),
    tag = "health"
)]
pub async fn live() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "alive".to_string(),
        timestamp: Utc::now(),
    })
}
