//! Compliance score aggregation and time-to-compliance estimation.

use aiact_core::{ComplianceStatus, Recommendation, RequirementAssessment};

/// Score contribution of one status, or `None` when excluded.
fn status_score(status: ComplianceStatus) -> Option<f64> {
    match status {
        ComplianceStatus::Compliant => Some(1.0),
        ComplianceStatus::PartiallyCompliant => Some(0.5),
        ComplianceStatus::NonCompliant | ComplianceStatus::RequiresReview => Some(0.0),
        ComplianceStatus::NotApplicable => None,
    }
}

/// Uniformly weighted mean of status scores, in `[0, 1]`.
///
/// `not_applicable` assessments are excluded from numerator and
/// denominator. Returns `0.0` when nothing is scorable.
pub fn score(assessments: &[RequirementAssessment]) -> f64 {
    let (total, count) = assessments
        .iter()
        .filter_map(|a| status_score(a.status))
        .fold((0.0_f64, 0_u32), |(sum, n), s| (sum + s, n + 1));
    if count == 0 {
        return 0.0;
    }
    total / f64::from(count)
}

/// Rough time to close all gaps, from the number of urgent recommendations.
pub fn estimate_compliance_time(recommendations: &[Recommendation]) -> &'static str {
    if recommendations.is_empty() {
        return "1-2 weeks";
    }
    let urgent = recommendations.iter().filter(|r| r.priority.is_urgent()).count();
    match urgent {
        n if n >= 5 => "3-6 months",
        n if n >= 3 => "6-12 weeks",
        _ => "2-6 weeks",
    }
}
