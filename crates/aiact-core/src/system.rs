//! # AI System Description
//!
//! The analyzer's sole input. Structural invariants (non-empty technique
//! and data-type lists, bounded description and name lengths) are checked
//! by [`SystemDescription::validate`] at the request boundary; the
//! analyzer assumes a validated value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ApplicationDomain, DataType, DeploymentContext, DevelopmentStage};
use crate::error::ValidationError;

/// Maximum system name length in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Default minimum description length in characters.
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 10;

/// Default maximum description length in characters.
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 50_000;

/// Inclusive character bounds on the free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for DescriptionLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_DESCRIPTION_LENGTH,
            max: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

fn new_system_id() -> String {
    Uuid::new_v4().to_string()
}

/// Description of an AI system submitted for assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SystemDescription {
    /// Identifier; a fresh UUID v4 when omitted.
    #[serde(default = "new_system_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Primary application domain.
    pub domain: ApplicationDomain,
    #[serde(default)]
    pub additional_domains: Vec<ApplicationDomain>,

    // Technical details
    pub ai_techniques: Vec<String>,
    pub data_types: Vec<DataType>,
    pub deployment_context: DeploymentContext,

    // Scope and impact
    pub target_users: String,
    pub geographic_scope: Vec<String>,
    #[serde(default)]
    pub estimated_users: Option<u64>,

    // Development details
    pub development_stage: DevelopmentStage,
    #[serde(default)]
    pub vendor_info: Option<String>,

    // Additional context
    #[serde(default)]
    pub regulatory_context: Option<String>,
    /// Existing risk mitigation measures, free text.
    #[serde(default)]
    pub risk_mitigation: Option<String>,
}

impl SystemDescription {
    /// Check the structural invariants, returning the first violation.
    pub fn validate(&self, limits: &DescriptionLimits) -> Result<(), ValidationError> {
        let name_len = self.name.chars().count();
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name_len > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong {
                max: MAX_NAME_LENGTH,
                actual: name_len,
            });
        }

        let len = self.description_length();
        if len < limits.min {
            return Err(ValidationError::DescriptionTooShort {
                min: limits.min,
                actual: len,
            });
        }
        if len > limits.max {
            return Err(ValidationError::DescriptionTooLong {
                max: limits.max,
                actual: len,
            });
        }

        if self.ai_techniques.is_empty() {
            return Err(ValidationError::EmptyTechniques);
        }
        if self.data_types.is_empty() {
            return Err(ValidationError::EmptyDataTypes);
        }
        Ok(())
    }

    /// Description length in characters (not bytes).
    pub fn description_length(&self) -> usize {
        self.description.chars().count()
    }

    /// Whether `risk_mitigation` is present and non-empty.
    ///
    /// Whitespace-only text still counts as a documented measure.
    pub fn has_risk_mitigation(&self) -> bool {
        self.risk_mitigation.as_deref().is_some_and(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> SystemDescription {
        SystemDescription {
            id: "sys-1".into(),
            name: "Resume Screener".into(),
            description: "AI system that screens resumes and ranks candidates.".into(),
            domain: ApplicationDomain::Employment,
            additional_domains: vec![],
            ai_techniques: vec!["Text Analysis".into()],
            data_types: vec![DataType::PersonalData],
            deployment_context: DeploymentContext::Workplace,
            target_users: "HR recruiters".into(),
            geographic_scope: vec!["EU".into()],
            estimated_users: Some(100),
            development_stage: DevelopmentStage::Production,
            vendor_info: None,
            regulatory_context: None,
            risk_mitigation: None,
        }
    }

    #[test]
    fn valid_sample_passes() {
        assert!(sample().validate(&DescriptionLimits::default()).is_ok());
    }

    #[test]
    fn short_description_rejected() {
        let mut s = sample();
        s.description = "too short".into();
        assert_eq!(
            s.validate(&DescriptionLimits::default()),
            Err(ValidationError::DescriptionTooShort { min: 10, actual: 9 })
        );
    }

    #[test]
    fn long_description_rejected_with_custom_limit() {
        let s = sample();
        let limits = DescriptionLimits { min: 10, max: 20 };
        assert!(matches!(
            s.validate(&limits),
            Err(ValidationError::DescriptionTooLong { max: 20, .. })
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut s = sample();
        s.description = "é".repeat(10);
        assert_eq!(s.description_length(), 10);
        assert!(s.validate(&DescriptionLimits::default()).is_ok());
    }

    #[test]
    fn empty_lists_rejected() {
        let mut s = sample();
        s.ai_techniques.clear();
        assert_eq!(
            s.validate(&DescriptionLimits::default()),
            Err(ValidationError::EmptyTechniques)
        );

        let mut s = sample();
        s.data_types.clear();
        assert_eq!(
            s.validate(&DescriptionLimits::default()),
            Err(ValidationError::EmptyDataTypes)
        );
    }

    #[test]
    fn name_bounds() {
        let mut s = sample();
        s.name = "   ".into();
        assert_eq!(s.validate(&DescriptionLimits::default()), Err(ValidationError::EmptyName));
        s.name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            s.validate(&DescriptionLimits::default()),
            Err(ValidationError::NameTooLong { .. })
        ));
    }

    #[test]
    fn whitespace_risk_mitigation_counts_as_present() {
        let mut s = sample();
        assert!(!s.has_risk_mitigation());
        s.risk_mitigation = Some(String::new());
        assert!(!s.has_risk_mitigation());
        s.risk_mitigation = Some("  ".into());
        assert!(s.has_risk_mitigation());
        s.risk_mitigation = Some("human review of all outputs".into());
        assert!(s.has_risk_mitigation());
    }

    #[test]
    fn deserialize_fills_defaults() {
        let json = r#"{
            "name": "FAQ Assistant",
            "description": "Answers frequently asked questions.",
            "domain": "general_purpose",
            "ai_techniques": ["NLP"],
            "data_types": ["text_documents"],
            "deployment_context": "online_platform",
            "target_users": "Website visitors",
            "geographic_scope": ["EU"],
            "development_stage": "production"
        }"#;
        let s: SystemDescription = serde_json::from_str(json).unwrap();
        assert!(Uuid::parse_str(&s.id).is_ok());
        assert!(s.additional_domains.is_empty());
        assert_eq!(s.estimated_users, None);
        assert_eq!(s.risk_mitigation, None);
    }

    #[test]
    fn deserialize_rejects_unknown_stage() {
        let json = r#"{
            "name": "X",
            "description": "Answers frequently asked questions.",
            "domain": "general_purpose",
            "ai_techniques": ["NLP"],
            "data_types": ["text_documents"],
            "deployment_context": "online_platform",
            "target_users": "Website visitors",
            "geographic_scope": ["EU"],
            "development_stage": "retired"
        }"#;
        assert!(serde_json::from_str::<SystemDescription>(json).is_err());
    }

    proptest! {
        #[test]
        fn descriptions_within_bounds_validate(len in 10usize..=400) {
            let mut s = sample();
            s.description = "a".repeat(len);
            prop_assert!(s.validate(&DescriptionLimits::default()).is_ok());
        }

        #[test]
        fn descriptions_below_minimum_fail(len in 0usize..10) {
            let mut s = sample();
            s.description = "a".repeat(len);
            let is_too_short = matches!(
                s.validate(&DescriptionLimits::default()),
                Err(ValidationError::DescriptionTooShort { .. })
            );
            prop_assert!(is_too_short);
        }
    }
}
