//! # Integration Tests for aiact-api
//!
//! Drives the assembled router with `oneshot` requests: assessment, reference
//! data, validation, health probes, rate limiting, metrics gating and the
//! OpenAPI document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use aiact_api::state::{AppConfig, AppState};

/// Helper: build the test app with default configuration.
fn test_app() -> axum::Router {
    aiact_api::app(AppState::new())
}

/// Helper: build the test app with a custom configuration.
fn test_app_with_config(config: AppConfig) -> axum::Router {
    aiact_api::app(AppState::with_config(config, None))
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn hiring_system() -> Value {
    json!({
        "name": "TalentRank",
        "description": "Automated resume screening that ranks candidates and filters applicants for interview decisions.",
        "domain": "employment",
        "ai_techniques": ["machine_learning", "natural_language_processing"],
        "data_types": ["personal_data", "text_documents"],
        "deployment_context": "cloud_service",
        "target_users": "HR departments",
        "geographic_scope": ["EU"],
        "estimated_users": 5000,
        "development_stage": "production"
    })
}

// -- Service info -------------------------------------------------------------

#[tokio::test]
async fn test_root_reports_active() {
    let response = test_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "EU AI Act Compliance Bot API");
    assert_eq!(body["status"], "active");
    assert_eq!(body["docs"], "/openapi.json");
}

// -- Assessment ---------------------------------------------------------------

#[tokio::test]
async fn test_assess_hiring_system_is_high_risk() {
    let request = json!({ "ai_system": hiring_system(), "user_id": "u-42" });
    let response = test_app()
        .oneshot(post_json("/api/v1/analysis/assess", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body.get("error_message").is_none());
    assert!(body["analysis_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["processing_time_seconds"].as_f64().unwrap() >= 0.0);

    let report = &body["report"];
    assert_eq!(report["risk_category"], "high");
    assert_eq!(report["compliance_score"], 0.0);
    assert_eq!(report["analysis_version"], "1.0");
    assert_eq!(report["critical_deadlines"], json!([]));
    assert!(report["requirement_assessments"][0]["evidence"].is_null());
    let ids: Vec<&str> = report["requirement_assessments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["requirement_id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"art9"));
    assert!(ids.contains(&"art14"));
    assert!(ids.contains(&"gdpr_compliance"));
}

#[tokio::test]
async fn test_assess_rejects_short_description() {
    let mut system = hiring_system();
    system["description"] = json!("too short");
    let response = test_app()
        .oneshot(post_json("/api/v1/analysis/assess", &json!({ "ai_system": system })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_assess_rejects_description_over_configured_max() {
    let config = AppConfig {
        max_analysis_length: 50,
        ..AppConfig::default()
    };
    let response = test_app_with_config(config)
        .oneshot(post_json(
            "/api/v1/analysis/assess",
            &json!({ "ai_system": hiring_system() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_assess_rejects_unknown_domain() {
    let mut system = hiring_system();
    system["domain"] = json!("astrology");
    let response = test_app()
        .oneshot(post_json("/api/v1/analysis/assess", &json!({ "ai_system": system })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_assess_rejects_empty_data_types() {
    let mut system = hiring_system();
    system["data_types"] = json!([]);
    let response = test_app()
        .oneshot(post_json("/api/v1/analysis/assess", &json!({ "ai_system": system })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- Reference data -----------------------------------------------------------

#[tokio::test]
async fn test_risk_categories_lists_four_tiers() {
    let response = test_app()
        .oneshot(get("/api/v1/analysis/risk-categories"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let categories: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["unacceptable", "high", "limited", "minimal"]);
    assert!(body[0]["examples"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_domains_lists_all_sixteen() {
    let response = test_app().oneshot(get("/api/v1/analysis/domains")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let domains = body.as_array().unwrap();
    assert_eq!(domains.len(), 16);
    assert_eq!(domains[0]["domain"], "biometric_identification");
    assert!(domains.iter().all(|d| d["description"].as_str().is_some()));
}

#[tokio::test]
async fn test_report_lookup_not_implemented() {
    let response = test_app()
        .oneshot(get("/api/v1/analysis/report/abc-123"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let body = body_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Report retrieval not yet implemented"));
}

// -- Validation ---------------------------------------------------------------

#[tokio::test]
async fn test_validate_warns_on_short_description() {
    let response = test_app()
        .oneshot(post_json("/api/v1/analysis/validate", &hiring_system()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
    assert!(body["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_validate_reports_invalid_description() {
    let mut system = hiring_system();
    system["name"] = json!("   ");
    let response = test_app()
        .oneshot(post_json("/api/v1/analysis/validate", &system))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert!(body["error"].as_str().is_some());
}

// -- Health -------------------------------------------------------------------

#[tokio::test]
async fn test_health_is_healthy() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["api"]["status"], "healthy");
    assert_eq!(body["checks"]["analyzer"]["status"], "healthy");
    assert!(body["uptime_seconds"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_detailed_health_reports_persistence_not_configured() {
    let response = test_app().oneshot(get("/health/detailed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["persistence"]["status"], "not_configured");
    assert_eq!(body["analyzer"]["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_and_liveness() {
    let ready = body_json(test_app().oneshot(get("/health/ready")).await.unwrap()).await;
    assert_eq!(ready["status"], "ready");
    let live = body_json(test_app().oneshot(get("/health/live")).await.unwrap()).await;
    assert_eq!(live["status"], "alive");
}

// -- Rate limiting ------------------------------------------------------------

#[tokio::test]
async fn test_rate_limit_per_client() {
    let config = AppConfig {
        rate_limit_requests: 2,
        ..AppConfig::default()
    };
    let app = test_app_with_config(config);

    let request = |client: &str| {
        Request::builder()
            .uri("/api/v1/analysis/domains")
            .header("x-client-id", client)
            .body(Body::empty())
            .unwrap()
    };

    for _ in 0..2 {
        let response = app.clone().oneshot(request("alice")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let limited = app.clone().oneshot(request("alice")).await.unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);

    let other = app.clone().oneshot(request("bob")).await.unwrap();
    assert_eq!(other.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let config = AppConfig {
        rate_limit_requests: 1,
        ..AppConfig::default()
    };
    let app = test_app_with_config(config);
    for _ in 0..3 {
        let response = app.clone().oneshot(get("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

// -- Metrics & OpenAPI --------------------------------------------------------

#[tokio::test]
async fn test_metrics_unavailable_without_recorder() {
    let response = test_app().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/api/v1/analysis/assess"].is_object());
}
