//! # Recommendation Synthesizer
//!
//! Expands assessor output and domain facts into structured, prioritized
//! [`Recommendation`] records.
//!
//! Both strategies finish the same way: a stable sort by
//! [`Priority::rank`] (ties keep insertion order) followed by truncation to
//! [`SynthesisStrategy::recommendation_cap`]. Generated identifiers never
//! influence ordering.

use aiact_core::{
    ApplicationDomain, ComplianceStatus, Priority, Recommendation, RequirementAssessment,
    SystemDescription,
};

use crate::assessor::mentions_chatbot;
use crate::classifier::is_decision_sensitive_domain;
use crate::config::SynthesisStrategy;
use crate::plans;

pub const BASIC_CATEGORY: &str = "legal";
pub const BASIC_EFFORT: &str = "2-4 weeks";
pub const BASIC_TIMELINE: &str = "Before deployment";
pub const DOMAIN_RISK_ASSESSMENT_TITLE: &str = "Conduct domain-specific risk assessment";

/// Synthesize recommendations using `strategy`.
pub fn synthesize(
    system: &SystemDescription,
    assessments: &[RequirementAssessment],
    strategy: SynthesisStrategy,
) -> Vec<Recommendation> {
    let mut recommendations = match strategy {
        SynthesisStrategy::Detailed => detailed(system, assessments),
        SynthesisStrategy::Basic => basic(system, assessments),
    };
    let generated = recommendations.len();
    prioritize(&mut recommendations, strategy.recommendation_cap());
    tracing::debug!(
        system_id = %system.id,
        strategy = %strategy,
        generated,
        kept = recommendations.len(),
        "recommendations synthesized"
    );
    recommendations
}

/// Stable sort by priority rank, then truncate to `cap`.
pub fn prioritize(recommendations: &mut Vec<Recommendation>, cap: usize) {
    recommendations.sort_by_key(|r| r.priority.rank());
    recommendations.truncate(cap);
}

// ---------------------------------------------------------------------------
// Detailed
// ---------------------------------------------------------------------------

fn detailed(system: &SystemDescription, assessments: &[RequirementAssessment]) -> Vec<Recommendation> {
    let mut out = Vec::new();
    for assessment in assessments.iter().filter(|a| a.status.is_open_gap()) {
        out.extend(requirement_plan(system, assessment));
    }
    out.extend(domain_plans(system.domain));
    out
}

/// Remediation plans for one open-gap assessment.
fn requirement_plan(system: &SystemDescription, assessment: &RequirementAssessment) -> Vec<Recommendation> {
    match assessment.requirement_id.as_str() {
        "art9" => vec![
            plans::risk_management_framework(system.domain),
            plans::risk_management_audit(system.domain),
        ],
        "art10" => vec![plans::data_governance_program(system.domain)],
        "art52" if mentions_chatbot(system) => vec![plans::ai_disclosure()],
        "gdpr_compliance" => vec![plans::gdpr_integration_program()],
        _ => Vec::new(),
    }
}

fn domain_plans(domain: ApplicationDomain) -> Vec<Recommendation> {
    match domain {
        ApplicationDomain::Employment => vec![plans::employment_fairness()],
        ApplicationDomain::Healthcare => vec![plans::healthcare_validation()],
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Basic
// ---------------------------------------------------------------------------

fn basic(system: &SystemDescription, assessments: &[RequirementAssessment]) -> Vec<Recommendation> {
    let mut out = Vec::new();
    for assessment in assessments.iter().filter(|a| a.status.is_open_gap()) {
        let priority = if assessment.status == ComplianceStatus::NonCompliant {
            Priority::High
        } else {
            Priority::Medium
        };
        for hint in &assessment.recommendations {
            out.push(Recommendation::new(
                format!("Address {}", assessment.title),
                hint.clone(),
                priority,
                BASIC_CATEGORY,
                BASIC_EFFORT,
                BASIC_TIMELINE,
                &[assessment.requirement_id.as_str()],
            ));
        }
    }

    if is_decision_sensitive_domain(system.domain) {
        out.push(Recommendation::new(
            DOMAIN_RISK_ASSESSMENT_TITLE,
            format!(
                "Perform a risk assessment specific to {} domain requirements",
                system.domain
            ),
            Priority::High,
            "risk_management",
            "3-4 weeks",
            BASIC_TIMELINE,
            &[],
        ));
    }
    out
}
