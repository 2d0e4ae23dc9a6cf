//! Executive summary and the extracted risk/action lists.

use aiact_core::{
    ComplianceStatus, Priority, Recommendation, RequirementAssessment, RiskCategory,
    SystemDescription,
};

use crate::scoring::estimate_compliance_time;

/// Maximum entries in `key_risks` and `immediate_actions`.
pub const TOP_N: usize = 5;

/// Narrative summary of an analysis.
pub fn summarize(
    system: &SystemDescription,
    risk: RiskCategory,
    assessments: &[RequirementAssessment],
    recommendations: &[Recommendation],
) -> String {
    let count = |status: ComplianceStatus| assessments.iter().filter(|a| a.status == status).count();
    let non_compliant = count(ComplianceStatus::NonCompliant);
    let review_required = count(ComplianceStatus::RequiresReview);
    let high_priority = recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .count();

    let finding = if non_compliant > 0 {
        "Immediate action is required to address compliance gaps before deployment."
    } else {
        "The system shows promise for compliance but requires formal assessment and documentation."
    };

    let focus: Vec<&str> = recommendations
        .iter()
        .take(3)
        .filter(|r| r.priority == Priority::High)
        .map(|r| r.category.as_str())
        .collect();

    let next_steps = if focus.is_empty() {
        "Focus on high-priority recommendations first.".to_string()
    } else {
        format!(
            "Focus on high-priority recommendations first, particularly around {}.",
            focus.join(", ")
        )
    };

    [
        format!(
            "The AI system '{}' has been classified as {} risk under the EU AI Act.",
            system.name,
            risk.as_str().to_uppercase()
        ),
        String::new(),
        "COMPLIANCE STATUS:".to_string(),
        format!("- {} requirements assessed", assessments.len()),
        format!("- {non_compliant} non-compliant areas identified"),
        format!("- {review_required} areas requiring detailed review"),
        format!("- {high_priority} high-priority recommendations"),
        String::new(),
        "KEY FINDINGS:".to_string(),
        format!(
            "The system operates in the {} domain, which carries specific regulatory obligations.",
            system.domain
        ),
        finding.to_string(),
        String::new(),
        "NEXT STEPS:".to_string(),
        next_steps,
        format!(
            "Estimated timeline for achieving compliance: {}.",
            estimate_compliance_time(recommendations)
        ),
    ]
    .join("\n")
}

/// "{title}: {rationale}" for each open-gap assessment, at most [`TOP_N`].
pub fn extract_key_risks(assessments: &[RequirementAssessment]) -> Vec<String> {
    assessments
        .iter()
        .filter(|a| a.status.is_open_gap())
        .take(TOP_N)
        .map(|a| format!("{}: {}", a.title, a.rationale))
        .collect()
}

/// Titles of critical or high recommendations, at most [`TOP_N`].
pub fn extract_immediate_actions(recommendations: &[Recommendation]) -> Vec<String> {
    recommendations
        .iter()
        .filter(|r| r.priority.is_urgent())
        .take(TOP_N)
        .map(|r| r.title.clone())
        .collect()
}
