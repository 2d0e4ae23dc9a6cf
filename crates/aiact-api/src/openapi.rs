//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

use crate::error::AppError;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EU AI Act Compliance Bot API",
        description = "Rule-based EU AI Act compliance assessment for AI systems.\n\nProvides:\n- **Risk classification** into unacceptable, high, limited and minimal tiers\n- **Requirement assessment** against the applicable articles\n- **Prioritized recommendations** with effort and timeline estimates\n\nEndpoints under `/api/*` are rate limited per `X-Client-Id`."
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    paths(
        crate::routes::analysis::assess,
        crate::routes::analysis::risk_categories,
        crate::routes::analysis::domains,
        crate::routes::analysis::get_report,
        crate::routes::analysis::validate,
        crate::routes::health::health,
        crate::routes::health::detailed,
        crate::routes::health::ready,
        crate::routes::health::live,
    ),
    components(schemas(
        crate::routes::analysis::ComplianceAnalysisRequest,
        crate::routes::analysis::ComplianceAnalysisResponse,
        crate::routes::analysis::RiskCategoryInfo,
        crate::routes::analysis::DomainInfo,
        crate::routes::analysis::ValidationReport,
        crate::routes::health::HealthResponse,
        crate::routes::health::CheckResult,
        crate::routes::health::ServiceStatus,
        crate::routes::health::ProbeResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        aiact_core::SystemDescription,
        aiact_core::ComplianceReport,
        aiact_core::RequirementAssessment,
        aiact_core::Recommendation,
        aiact_core::RiskCategory,
        aiact_core::ComplianceStatus,
        aiact_core::Priority,
        aiact_core::ConfidenceLevel,
        aiact_core::ApplicationDomain,
        aiact_core::DataType,
        aiact_core::DeploymentContext,
        aiact_core::DevelopmentStage,
    )),
    tags(
        (name = "analysis", description = "Compliance assessment and reference data"),
        (name = "health", description = "Liveness, readiness and component health"),
    )
)]
pub struct ApiDoc;

/// Router serving the generated document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Result<Response, AppError> {
    render_document(&ApiDoc::openapi())
}

/// Serialize `doc` as a JSON response; a serializer fault is a 500.
fn render_document(doc: &utoipa::openapi::OpenApi) -> Result<Response, AppError> {
    let body = doc
        .to_json()
        .map_err(|e| AppError::Internal(format!("openapi serialization: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
