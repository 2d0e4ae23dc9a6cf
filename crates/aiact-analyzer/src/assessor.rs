//! # Requirement Assessor
//!
//! Evaluates one requirement against one system. Calls are independent:
//! the outcome for a requirement never depends on any other requirement.
//!
//! The default outcome is `requires_review` with a generic rationale. The
//! rule-set has three overrides, keyed on requirement id. No current rule
//! yields `compliant` or `non_compliant`.

use aiact_core::{ComplianceStatus, RequirementAssessment, RequirementRecord, SystemDescription};

pub const DEFAULT_RATIONALE: &str = "Requires detailed review based on system implementation";

/// Whether the lower-cased description mentions a chatbot.
pub(crate) fn mentions_chatbot(system: &SystemDescription) -> bool {
    system.description.to_lowercase().contains("chatbot")
}

/// Whether any declared data type is a personal-data category.
pub(crate) fn processes_personal_data(system: &SystemDescription) -> bool {
    system
        .data_types
        .iter()
        .any(|dt| dt.as_str().contains("personal"))
}

/// Assess `requirement` against `system`.
pub fn assess(system: &SystemDescription, requirement: &RequirementRecord) -> RequirementAssessment {
    let (status, rationale, recommendations) = match requirement.id {
        "art52" if mentions_chatbot(system) => (
            ComplianceStatus::RequiresReview,
            "System appears to be conversational AI requiring transparency disclosure",
            vec!["Implement clear disclosure that users are interacting with AI".to_string()],
        ),
        "art9" if system.has_risk_mitigation() => (
            ComplianceStatus::PartiallyCompliant,
            "Risk mitigation measures mentioned but require formal risk management system",
            vec!["Formalize risk management system per Article 9 requirements".to_string()],
        ),
        "gdpr_compliance" if processes_personal_data(system) => (
            ComplianceStatus::RequiresReview,
            "System processes personal data, requiring GDPR compliance assessment",
            vec![
                "Conduct GDPR compliance assessment".to_string(),
                "Implement data subject rights procedures".to_string(),
                "Ensure lawful basis for processing".to_string(),
            ],
        ),
        _ => (ComplianceStatus::RequiresReview, DEFAULT_RATIONALE, Vec::new()),
    };

    tracing::trace!(
        system_id = %system.id,
        requirement = requirement.id,
        status = %status,
        "requirement assessed"
    );

    RequirementAssessment::for_requirement(requirement, status, rationale, recommendations)
}
