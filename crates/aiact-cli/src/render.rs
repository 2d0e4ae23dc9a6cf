//! # Report Rendering
//!
//! Plain-text report layout for the terminal and the compact JSON digest
//! written by `--json`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aiact_core::{ComplianceReport, RiskCategory, SystemDescription};

const RULE_WIDTH: usize = 60;
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Compact per-system summary written by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDigest {
    pub system_id: String,
    pub risk_category: RiskCategory,
    pub compliance_score: f64,
    pub generated_at: DateTime<Utc>,
    pub key_risks: Vec<String>,
    pub immediate_actions: Vec<String>,
    pub estimated_compliance_time: String,
}

impl From<&ComplianceReport> for ReportDigest {
    fn from(report: &ComplianceReport) -> Self {
        Self {
            system_id: report.system_id.clone(),
            risk_category: report.risk_category,
            compliance_score: report.compliance_score,
            generated_at: report.generated_at,
            key_risks: report.key_risks.clone(),
            immediate_actions: report.immediate_actions.clone(),
            estimated_compliance_time: report.estimated_compliance_time.clone(),
        }
    }
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn preview(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

/// One analysis laid out as terminal text.
///
/// `verbose` adds the system details, per-requirement rationale and the
/// full recommendation list.
pub struct ReportView<'a> {
    pub system: &'a SystemDescription,
    pub report: &'a ComplianceReport,
    pub elapsed_secs: f64,
    pub verbose: bool,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (system, report) = (self.system, self.report);

        writeln!(f, "\n{}", rule())?;
        writeln!(f, "ANALYZING: {}", system.name)?;
        writeln!(f, "{}", rule())?;

        if self.verbose {
            let data_types: Vec<&str> = system.data_types.iter().map(|d| d.as_str()).collect();
            writeln!(f, "\nSYSTEM DETAILS:")?;
            writeln!(f, "Domain: {}", system.domain)?;
            writeln!(f, "Description: {}", preview(&system.description))?;
            writeln!(f, "AI Techniques: {}", system.ai_techniques.join(", "))?;
            writeln!(f, "Data Types: {}", data_types.join(", "))?;
            writeln!(f, "Deployment: {}", system.deployment_context)?;
        }

        writeln!(f, "\nCOMPLIANCE ASSESSMENT RESULTS:")?;
        writeln!(
            f,
            "Risk Category: {}",
            report.risk_category.as_str().to_uppercase()
        )?;
        writeln!(f, "Compliance Score: {:.2}", report.compliance_score)?;
        writeln!(f, "Confidence: {}", report.confidence_level)?;
        writeln!(f, "Analysis Time: {:.2} seconds", self.elapsed_secs)?;

        writeln!(f, "\nEXECUTIVE SUMMARY:")?;
        writeln!(f, "{}", report.executive_summary)?;

        writeln!(f, "\nKEY RISKS ({}):", report.key_risks.len())?;
        for (i, risk) in report.key_risks.iter().enumerate() {
            writeln!(f, "{}. {risk}", i + 1)?;
        }

        writeln!(f, "\nIMMEDIATE ACTIONS ({}):", report.immediate_actions.len())?;
        for (i, action) in report.immediate_actions.iter().enumerate() {
            writeln!(f, "{}. {action}", i + 1)?;
        }

        if self.verbose {
            writeln!(
                f,
                "\nDETAILED REQUIREMENTS ({}):",
                report.requirement_assessments.len()
            )?;
            for req in &report.requirement_assessments {
                writeln!(f, "- {}: {}", req.title, req.status)?;
                writeln!(f, "  Rationale: {}", req.rationale)?;
            }

            writeln!(f, "\nRECOMMENDATIONS ({}):", report.recommendations.len())?;
            for rec in &report.recommendations {
                writeln!(
                    f,
                    "- [{}] {}",
                    rec.priority.as_str().to_uppercase(),
                    rec.title
                )?;
                writeln!(f, "  {}", rec.description)?;
                writeln!(f, "  Timeline: {}", rec.timeline)?;
                writeln!(f, "  Effort: {}", rec.estimated_effort)?;
            }
        }

        Ok(())
    }
}

/// Render one analysis as terminal text.
pub fn render_report(
    system: &SystemDescription,
    report: &ComplianceReport,
    elapsed_secs: f64,
    verbose: bool,
) -> String {
    ReportView {
        system,
        report,
        elapsed_secs,
        verbose,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::Sample;
    use aiact_analyzer::ComplianceAnalyzer;

    fn analyzed(sample: Sample) -> (SystemDescription, ComplianceReport) {
        let system = sample.system();
        let report = ComplianceAnalyzer::default().analyze(&system).unwrap();
        (system, report)
    }

    #[test]
    fn digest_copies_report_fields() {
        let (_, report) = analyzed(Sample::Hiring);
        let digest = ReportDigest::from(&report);
        assert_eq!(digest.system_id, "sample-hiring");
        assert_eq!(digest.risk_category, RiskCategory::High);
        assert_eq!(digest.key_risks, report.key_risks);
        assert_eq!(digest.estimated_compliance_time, report.estimated_compliance_time);
    }

    #[test]
    fn digest_serializes_snake_case_risk() {
        let (_, report) = analyzed(Sample::Chatbot);
        let json = serde_json::to_value(ReportDigest::from(&report)).unwrap();
        assert_eq!(json["risk_category"], "limited");
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn terse_render_omits_details() {
        let (system, report) = analyzed(Sample::Hiring);
        let text = render_report(&system, &report, 0.01, false);
        assert!(text.contains("ANALYZING: Resume Screening System"));
        assert!(text.contains("Risk Category: HIGH"));
        assert!(text.contains("Compliance Score: 0.00"));
        assert!(!text.contains("DETAILED REQUIREMENTS"));
        assert!(!text.contains("SYSTEM DETAILS"));
    }

    #[test]
    fn verbose_render_lists_requirements_and_recommendations() {
        let (system, report) = analyzed(Sample::Medical);
        let text = render_report(&system, &report, 0.01, true);
        assert!(text.contains("SYSTEM DETAILS:"));
        assert!(text.contains(&format!(
            "DETAILED REQUIREMENTS ({}):",
            report.requirement_assessments.len()
        )));
        assert!(text.contains("[CRITICAL]"));
    }

    #[test]
    fn sections_are_numbered_in_order() {
        let (system, report) = analyzed(Sample::Hiring);
        let text = render_report(&system, &report, 1.5, false);
        assert!(text.starts_with(&format!("\n{}\nANALYZING: ", rule())));
        assert!(text.contains("Analysis Time: 1.50 seconds"));
        let risks = text.find("KEY RISKS (").unwrap();
        let actions = text.find("IMMEDIATE ACTIONS (").unwrap();
        assert!(risks < actions);
        assert!(text[risks..actions].contains("\n1. "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn long_description_is_truncated() {
        let long = "a".repeat(250);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }
}
