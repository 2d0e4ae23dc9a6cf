//! # Compliance Analyzer
//!
//! Runs the pipeline left to right: classify, select, assess, synthesize,
//! score, summarize. Every stage is a pure function of its inputs, so one
//! analyzer instance can be shared across threads without synchronization.

use chrono::Utc;
use uuid::Uuid;

use aiact_core::{
    AnalysisError, ComplianceReport, ConfidenceLevel, RequirementAssessment, SystemDescription,
    ANALYSIS_VERSION,
};

use crate::config::AnalyzerConfig;
use crate::{assessor, catalog, classifier, scoring, summary, synthesis};

/// Rule-based EU AI Act compliance analyzer.
#[derive(Debug, Clone, Default)]
pub struct ComplianceAnalyzer {
    config: AnalyzerConfig,
}

impl ComplianceAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one system and build its report.
    ///
    /// The input is trusted: callers validate it with
    /// [`SystemDescription::validate`] first. Returns [`AnalysisError`] only
    /// when a pipeline invariant is broken, never a partial report.
    pub fn analyze(&self, system: &SystemDescription) -> Result<ComplianceReport, AnalysisError> {
        let risk_category = classifier::classify(system);
        tracing::debug!(system_id = %system.id, risk = %risk_category, "risk classified");

        let requirements = catalog::select(system, risk_category);
        if requirements.is_empty() {
            return Err(AnalysisError::NoRequirements(risk_category.to_string()));
        }
        tracing::debug!(
            system_id = %system.id,
            requirements = requirements.len(),
            "requirements selected"
        );

        let assessments: Vec<RequirementAssessment> = requirements
            .iter()
            .map(|r| assessor::assess(system, r))
            .collect();

        let recommendations =
            synthesis::synthesize(system, &assessments, self.config.synthesis);

        let compliance_score = scoring::score(&assessments);
        if !(0.0..=1.0).contains(&compliance_score) {
            return Err(AnalysisError::ScoreOutOfRange(compliance_score));
        }

        let executive_summary =
            summary::summarize(system, risk_category, &assessments, &recommendations);
        let key_risks = summary::extract_key_risks(&assessments);
        let immediate_actions = summary::extract_immediate_actions(&recommendations);
        let estimated_compliance_time =
            scoring::estimate_compliance_time(&recommendations).to_string();

        tracing::info!(
            system_id = %system.id,
            risk = %risk_category,
            score = compliance_score,
            assessments = assessments.len(),
            recommendations = recommendations.len(),
            "compliance analysis complete"
        );

        Ok(ComplianceReport {
            id: Uuid::new_v4().to_string(),
            system_id: system.id.clone(),
            generated_at: Utc::now(),
            risk_category,
            compliance_score,
            requirement_assessments: assessments,
            recommendations,
            executive_summary,
            key_risks,
            immediate_actions,
            estimated_compliance_time,
            critical_deadlines: Vec::new(),
            analysis_version: ANALYSIS_VERSION.to_string(),
            confidence_level: ConfidenceLevel::Medium,
        })
    }
}
