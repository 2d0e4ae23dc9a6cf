//! # aiact-api - Axum API Service for EU AI Act Compliance Assessment
//!
//! Exposes the rule-based [`aiact_analyzer::ComplianceAnalyzer`] over HTTP
//! together with reference data, health probes and Prometheus metrics.
//!
//! ## API Surface
//!
//! | Prefix                | Module                 | Domain                  |
//! |-----------------------|------------------------|-------------------------|
//! | `/`                   | this crate             | Service info            |
//! | `/api/v1/analysis/*`  | [`routes::analysis`]   | Assessment, taxonomies  |
//! | `/health/*`           | [`routes::health`]     | Probes                  |
//! | `/openapi.json`       | [`openapi`]            | OpenAPI document        |
//! | `/metrics`            | this crate             | Prometheus scrape       |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → MetricsMiddleware → RateLimitMiddleware (/api/*) → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::from_fn;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::rate_limit::{RateLimitConfig, RateLimiter};
use crate::state::{AppConfig, AppState, VERSION};

/// Request bodies above this size are rejected before parsing.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes, `/metrics` and `/openapi.json` sit outside the rate
/// limiter.
pub fn app(state: AppState) -> Router {
    let limiter = RateLimiter::new(RateLimitConfig {
        max_requests: state.config.rate_limit_requests,
        window_secs: state.config.rate_limit_period_secs,
    });

    let api = routes::analysis::router()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(from_fn(middleware::rate_limit::rate_limit_middleware))
        .layer(Extension(limiter));

    let mut app = Router::new()
        .route("/", get(root))
        .route("/metrics", get(prometheus_metrics))
        .merge(routes::health::router())
        .merge(openapi::router())
        .merge(api);

    if state.config.metrics_enabled {
        app = app.layer(from_fn(middleware::metrics::metrics_middleware));
    }

    app.layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy from the configured origin list.
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub status: String,
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "EU AI Act Compliance Bot API".to_string(),
        version: VERSION.to_string(),
        docs: "/openapi.json".to_string(),
        status: "active".to_string(),
    })
}

/// GET /metrics - Prometheus text exposition, 503 when metrics are off.
async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match (&state.metrics, state.config.metrics_enabled) {
        (Some(handle), true) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            handle.render(),
        )
            .into_response(),
        _ => AppError::ServiceUnavailable("metrics are disabled".to_string()).into_response(),
    }
}
