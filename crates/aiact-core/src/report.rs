//! # Compliance Report
//!
//! The aggregate result of one analysis. Constructed once per call, returned
//! to the caller, never mutated or persisted by the analyzer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::RequirementAssessment;
use crate::recommendation::Recommendation;
use crate::risk::RiskCategory;

/// Version tag of the rule-based analysis methodology.
pub const ANALYSIS_VERSION: &str = "1.0";

/// Confidence in an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full compliance assessment for one [`SystemDescription`](crate::SystemDescription).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplianceReport {
    /// Report identifier (UUID v4).
    pub id: String,
    /// Identifier of the analyzed system.
    pub system_id: String,
    pub generated_at: DateTime<Utc>,

    // Overall assessment
    pub risk_category: RiskCategory,
    /// Aggregate score in `[0, 1]`.
    pub compliance_score: f64,

    // Detailed assessments
    /// Never empty.
    pub requirement_assessments: Vec<RequirementAssessment>,
    /// Priority-ordered.
    pub recommendations: Vec<Recommendation>,

    // Summary
    pub executive_summary: String,
    /// At most five entries.
    pub key_risks: Vec<String>,
    /// At most five entries.
    pub immediate_actions: Vec<String>,
    pub estimated_compliance_time: String,
    /// Regulatory deadlines the system must meet; none are derived yet.
    #[serde(default)]
    pub critical_deadlines: Vec<String>,

    // Metadata
    pub analysis_version: String,
    pub confidence_level: ConfidenceLevel,
}

impl ComplianceReport {
    /// Requirement identifiers in assessment order.
    pub fn requirement_ids(&self) -> Vec<&str> {
        self.requirement_assessments
            .iter()
            .map(|a| a.requirement_id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ComplianceStatus;

    fn report() -> ComplianceReport {
        ComplianceReport {
            id: "r-1".into(),
            system_id: "s-1".into(),
            generated_at: Utc::now(),
            risk_category: RiskCategory::Minimal,
            compliance_score: 0.0,
            requirement_assessments: vec![RequirementAssessment {
                requirement_id: "gdpr_compliance".into(),
                title: "GDPR Compliance".into(),
                description: "d".into(),
                status: ComplianceStatus::RequiresReview,
                rationale: "r".into(),
                recommendations: vec![],
                evidence: None,
            }],
            recommendations: vec![],
            executive_summary: "summary".into(),
            key_risks: vec![],
            immediate_actions: vec![],
            estimated_compliance_time: "1-2 weeks".into(),
            critical_deadlines: vec![],
            analysis_version: ANALYSIS_VERSION.into(),
            confidence_level: ConfidenceLevel::Medium,
        }
    }

    #[test]
    fn requirement_ids_in_order() {
        assert_eq!(report().requirement_ids(), vec!["gdpr_compliance"]);
    }

    #[test]
    fn report_json_uses_wire_names() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["risk_category"], "minimal");
        assert_eq!(json["confidence_level"], "medium");
        assert_eq!(json["analysis_version"], "1.0");
        assert_eq!(json["requirement_assessments"][0]["status"], "requires_review");
        assert_eq!(json["critical_deadlines"], serde_json::json!([]));
        assert!(json["requirement_assessments"][0]["evidence"].is_null());
    }

    #[test]
    fn report_without_deadlines_deserializes() {
        let mut json = serde_json::to_value(report()).unwrap();
        json.as_object_mut().unwrap().remove("critical_deadlines");
        let parsed: ComplianceReport = serde_json::from_value(json).unwrap();
        assert!(parsed.critical_deadlines.is_empty());
    }
}
