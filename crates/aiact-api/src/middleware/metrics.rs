//! # Prometheus Metrics
//!
//! Request and analysis metrics recorded through the `metrics` facade and
//! exported in Prometheus text format by `metrics-exporter-prometheus`.
//!
//! | Metric                                | Type      | Labels            |
//! |---------------------------------------|-----------|-------------------|
//! | `http_requests_total`                 | counter   | method, status    |
//! | `http_request_duration_seconds`       | histogram | method            |
//! | `compliance_analyses_total`           | counter   | risk_category     |
//! | `compliance_analysis_failures_total`  | counter   |                   |
//!
//! Without an installed recorder every macro call is a no-op, so handlers
//! record unconditionally.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use aiact_core::RiskCategory;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub const COMPLIANCE_ANALYSES_TOTAL: &str = "compliance_analyses_total";
pub const COMPLIANCE_ANALYSIS_FAILURES_TOTAL: &str = "compliance_analysis_failures_total";

/// Install the process-wide Prometheus recorder and describe all metrics.
///
/// Call once at startup; a second call fails because a global recorder is
/// already set.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(&[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0])?
        .install_recorder()?;
    describe();
    Ok(handle)
}

fn describe() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total HTTP requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "HTTP request duration in seconds"
    );
    describe_counter!(COMPLIANCE_ANALYSES_TOTAL, "Completed compliance analyses by risk category");
    describe_counter!(COMPLIANCE_ANALYSIS_FAILURES_TOTAL, "Compliance analyses that failed");
}

/// Record one completed analysis.
pub fn record_analysis(risk: RiskCategory) {
    counter!(COMPLIANCE_ANALYSES_TOTAL, "risk_category" => risk.as_str()).increment(1);
}

/// Record one failed analysis.
pub fn record_analysis_failure() {
    counter!(COMPLIANCE_ANALYSIS_FAILURES_TOTAL).increment(1);
}

/// Middleware that records request counts and latency.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    counter!(HTTP_REQUESTS_TOTAL, "method" => method.clone(), "status" => status).increment(1);
    histogram!(HTTP_REQUEST_DURATION_SECONDS, "method" => method).record(elapsed);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn analysis_counters_render() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, || {
            describe();
            record_analysis(RiskCategory::High);
            record_analysis(RiskCategory::High);
            record_analysis_failure();
        });
        let rendered = handle.render();
        assert!(rendered.contains("compliance_analyses_total{risk_category=\"high\"} 2"));
        assert!(rendered.contains("compliance_analysis_failures_total 1"));
    }
}
