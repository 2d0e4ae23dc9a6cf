//! # Compliance Analysis Routes
//!
//! - `POST /api/v1/analysis/assess`                - Run a full compliance assessment
//! - `GET  /api/v1/analysis/risk-categories`       - Risk tier reference data
//! - `GET  /api/v1/analysis/domains`               - Application domain reference data
//! - `GET  /api/v1/analysis/report/{analysis_id}`  - Stored report lookup (not available)
//! - `POST /api/v1/analysis/validate`              - Validate a description without analysis

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use aiact_core::{
    ApplicationDomain, ComplianceReport, DescriptionLimits, RiskCategory, SystemDescription,
    ValidationError,
};

use crate::error::AppError;
use crate::extractors::{extract_json, extract_validated_json, Validate};
use crate::middleware::metrics;
use crate::state::AppState;

/// Descriptions shorter than this draw a warning from `/validate`.
pub const SHORT_DESCRIPTION_WARNING_THRESHOLD: usize = 100;

/// User counts above this draw a suggestion from `/validate`.
pub const LARGE_USER_BASE_THRESHOLD: u64 = 1_000_000;

pub const SHORT_DESCRIPTION_WARNING: &str =
    "Description is quite short. More detail may improve analysis accuracy.";
pub const LARGE_USER_BASE_SUGGESTION: &str =
    "Large user base detected. Consider additional privacy and safety measures.";
pub const REPORT_RETRIEVAL_UNAVAILABLE: &str = "Report retrieval not yet implemented. Reports are currently returned directly from analysis endpoint.";

/// Assemble the analysis router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/analysis/assess", post(assess))
        .route("/api/v1/analysis/risk-categories", get(risk_categories))
        .route("/api/v1/analysis/domains", get(domains))
        .route("/api/v1/analysis/report/{analysis_id}", get(get_report))
        .route("/api/v1/analysis/validate", post(validate))
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Request body for `POST /assess`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplianceAnalysisRequest {
    pub ai_system: SystemDescription,
    /// Free-form options; accepted and ignored by the rule-based analyzer.
    #[serde(default = "empty_object")]
    pub analysis_options: serde_json::Value,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Validate for ComplianceAnalysisRequest {
    fn validate(&self, limits: &DescriptionLimits) -> Result<(), ValidationError> {
        self.ai_system.validate(limits)
    }
}

/// Response envelope for `POST /assess`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplianceAnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ComplianceReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub analysis_id: String,
    pub processing_time_seconds: f64,
}

/// One entry of `GET /risk-categories`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskCategoryInfo {
    pub category: RiskCategory,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

impl From<RiskCategory> for RiskCategoryInfo {
    fn from(category: RiskCategory) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            description: category.description().to_string(),
            examples: category.examples().iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// One entry of `GET /domains`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DomainInfo {
    pub domain: ApplicationDomain,
    pub description: String,
}

/// Response for `POST /validate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// Check `system` against `limits` and collect advisory notes.
    ///
    /// Advisory notes are only produced for valid descriptions.
    pub fn check(system: &SystemDescription, limits: &DescriptionLimits) -> Self {
        if let Err(err) = system.validate(limits) {
            return Self {
                valid: false,
                error: Some(err.to_string()),
                ..Self::default()
            };
        }

        let mut report = Self {
            valid: true,
            ..Self::default()
        };
        if system.description_length() < SHORT_DESCRIPTION_WARNING_THRESHOLD {
            report.warnings.push(SHORT_DESCRIPTION_WARNING.to_string());
        }
        if system
            .estimated_users
            .is_some_and(|n| n > LARGE_USER_BASE_THRESHOLD)
        {
            report.suggestions.push(LARGE_USER_BASE_SUGGESTION.to_string());
        }
        report
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/analysis/assess - Assess an AI system for EU AI Act compliance.
#[utoipa::path(
    post,
    path = "/api/v1/analysis/assess",
    request_body = ComplianceAnalysisRequest,
    responses(
        (status = 200, description = "Analysis envelope; `success=false` if the analysis failed", body = ComplianceAnalysisResponse),
        (status = 422, description = "Invalid system description", body = crate::error::ErrorBody),
        (status = 429, description = "Rate limit exceeded", body = crate::error::ErrorBody),
    ),
    tag = "analysis"
)]
pub async fn assess(
    State(state): State<AppState>,
    body: Result<Json<ComplianceAnalysisRequest>, JsonRejection>,
) -> Result<Json<ComplianceAnalysisResponse>, AppError> {
    let start = Instant::now();
    let analysis_id = Uuid::new_v4().to_string();
    let request = extract_validated_json(body, &state.config.description_limits())?;

    let response = match state.analyzer.analyze(&request.ai_system) {
        Ok(report) => {
            let processing_time_seconds = start.elapsed().as_secs_f64();
            metrics::record_analysis(report.risk_category);
            tracing::info!(
                analysis_id = %analysis_id,
                system_id = %request.ai_system.id,
                processing_time_seconds,
                risk_category = %report.risk_category,
                user_id = request.user_id.as_deref().unwrap_or("-"),
                "analysis completed"
            );
            ComplianceAnalysisResponse {
                success: true,
                report: Some(report),
                error_message: None,
                analysis_id,
                processing_time_seconds,
            }
        }
        Err(err) => {
            let processing_time_seconds = start.elapsed().as_secs_f64();
            metrics::record_analysis_failure();
            tracing::error!(
                analysis_id = %analysis_id,
                error = %err,
                processing_time_seconds,
                "analysis failed"
            );
            ComplianceAnalysisResponse {
                success: false,
                report: None,
                error_message: Some(format!("Analysis failed: {err}")),
                analysis_id,
                processing_time_seconds,
            }
        }
    };

    Ok(Json(response))
}

/// GET /api/v1/analysis/risk-categories - EU AI Act risk tiers.
#[utoipa::path(
    get,
    path = "/api/v1/analysis/risk-categories",
    responses(
        (status = 200, description = "Risk categories, most severe first", body = Vec<RiskCategoryInfo>),
    ),
    tag = "analysis"
)]
pub async fn risk_categories() -> Json<Vec<RiskCategoryInfo>> {
    Json(
        RiskCategory::all()
            .iter()
            .copied()
            .map(RiskCategoryInfo::from)
            .collect(),
    )
}

/// GET /api/v1/analysis/domains - Application domains used for classification.
#[utoipa::path(
    get,
    path = "/api/v1/analysis/domains",
    responses(
        (status = 200, description = "Application domains", body = Vec<DomainInfo>),
    ),
    tag = "analysis"
)]
pub async fn domains() -> Json<Vec<DomainInfo>> {
    Json(
        ApplicationDomain::all()
            .iter()
            .map(|&domain| DomainInfo {
                domain,
                description: domain.description().to_string(),
            })
            .collect(),
    )
}

/// GET /api/v1/analysis/report/{analysis_id} - Reports are not stored.
#[utoipa::path(
    get,
    path = "/api/v1/analysis/report/{analysis_id}",
    params(
        ("analysis_id" = String, Path, description = "Analysis identifier")
    ),
    responses(
        (status = 501, description = "Report storage is not available", body = crate::error::ErrorBody),
    ),
    tag = "analysis"
)]
pub async fn get_report(Path(analysis_id): Path<String>) -> AppError {
    tracing::debug!(%analysis_id, "report lookup requested");
    AppError::NotImplemented(REPORT_RETRIEVAL_UNAVAILABLE.to_string())
}

/// POST /api/v1/analysis/validate - Validate a description without analysis.
#[utoipa::path(
    post,
    path = "/api/v1/analysis/validate",
    request_body = SystemDescription,
    responses(
        (status = 200, description = "Validation outcome with advisory notes", body = ValidationReport),
        (status = 422, description = "Body is not a system description", body = crate::error::ErrorBody),
    ),
    tag = "analysis"
)]
pub async fn validate(
    State(state): State<AppState>,
    body: Result<Json<SystemDescription>, JsonRejection>,
) -> Result<Json<ValidationReport>, AppError> {
    let system = extract_json(body)?;
    Ok(Json(ValidationReport::check(
        &system,
        &state.config.description_limits(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiact_core::{DataType, DeploymentContext, DevelopmentStage};

    fn system(description: &str, estimated_users: Option<u64>) -> SystemDescription {
        SystemDescription {
            id: "sys-1".into(),
            name: "Resume Screener".into(),
            description: description.into(),
            domain: ApplicationDomain::Employment,
            additional_domains: vec![],
            ai_techniques: vec!["machine_learning".into()],
            data_types: vec![DataType::PersonalData],
            deployment_context: DeploymentContext::CloudService,
            target_users: "HR teams".into(),
            geographic_scope: vec!["EU".into()],
            estimated_users,
            development_stage: DevelopmentStage::Production,
            vendor_info: None,
            regulatory_context: None,
            risk_mitigation: None,
        }
    }

    #[test]
    fn short_description_warns() {
        let report = ValidationReport::check(
            &system("Screens resumes for fit.", None),
            &DescriptionLimits::default(),
        );
        assert!(report.valid);
        assert_eq!(report.warnings, vec![SHORT_DESCRIPTION_WARNING.to_string()]);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn large_user_base_suggests() {
        let long = "x".repeat(150);
        let report = ValidationReport::check(
            &system(&long, Some(2_000_000)),
            &DescriptionLimits::default(),
        );
        assert!(report.valid);
        assert!(report.warnings.is_empty());
        assert_eq!(report.suggestions, vec![LARGE_USER_BASE_SUGGESTION.to_string()]);
    }

    #[test]
    fn exactly_one_million_users_is_not_large() {
        let long = "x".repeat(150);
        let report = ValidationReport::check(
            &system(&long, Some(1_000_000)),
            &DescriptionLimits::default(),
        );
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn invalid_description_reports_error() {
        let report =
            ValidationReport::check(&system("tiny", None), &DescriptionLimits::default());
        assert!(!report.valid);
        assert!(report.error.is_some());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn request_defaults_options_to_empty_object() {
        let json = serde_json::json!({ "ai_system": system("An AI resume screening tool.", None) });
        let req: ComplianceAnalysisRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.analysis_options, serde_json::json!({}));
        assert!(req.user_id.is_none());
    }

    #[test]
    fn risk_category_info_carries_examples() {
        let info = RiskCategoryInfo::from(RiskCategory::Limited);
        assert_eq!(info.title, RiskCategory::Limited.title());
        assert!(!info.examples.is_empty());
    }
}
