//! # Risk Categories
//!
//! The four risk tiers of the modeled regulation. The declaration order is
//! the classification precedence (unacceptable is checked first, minimal is
//! the fallback); it is not a scoring order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Risk tier assigned to an AI system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Prohibited practices.
    Unacceptable,
    /// Subject to the full set of high-risk obligations.
    High,
    /// Subject to transparency obligations.
    Limited,
    /// No specific obligations beyond horizontal law.
    Minimal,
}

impl RiskCategory {
    /// All categories in classification precedence order.
    pub fn all() -> &'static [RiskCategory] {
        &[Self::Unacceptable, Self::High, Self::Limited, Self::Minimal]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unacceptable => "unacceptable",
            Self::High => "high",
            Self::Limited => "limited",
            Self::Minimal => "minimal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Unacceptable => "Unacceptable Risk",
            Self::High => "High Risk",
            Self::Limited => "Limited Risk",
            Self::Minimal => "Minimal Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Unacceptable => "AI practices that are prohibited under the EU AI Act",
            Self::High => "AI systems subject to strict compliance requirements",
            Self::Limited => "AI systems with transparency obligations",
            Self::Minimal => "AI systems with no specific obligations under EU AI Act",
        }
    }

    /// Representative systems for each tier.
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            Self::Unacceptable => &[
                "Social scoring systems",
                "Real-time biometric identification in public spaces",
                "Emotion recognition in workplace/education",
                "Subliminal manipulation techniques",
            ],
            Self::High => &[
                "Safety components in critical infrastructure",
                "Educational assessment systems",
                "Employment decision systems",
                "Essential service access systems",
                "Law enforcement applications",
            ],
            Self::Limited => &[
                "Chatbots and conversational AI",
                "Emotion recognition systems",
                "Biometric categorization",
                "AI-generated content",
            ],
            Self::Minimal => &[
                "AI-enabled video games",
                "Spam filters",
                "Inventory management systems",
                "Most other AI applications",
            ],
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "risk category",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order_is_fixed() {
        assert_eq!(
            RiskCategory::all(),
            &[
                RiskCategory::Unacceptable,
                RiskCategory::High,
                RiskCategory::Limited,
                RiskCategory::Minimal
            ]
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&RiskCategory::Unacceptable).unwrap();
        assert_eq!(json, "\"unacceptable\"");
        let parsed: RiskCategory = serde_json::from_str("\"limited\"").unwrap();
        assert_eq!(parsed, RiskCategory::Limited);
    }

    #[test]
    fn every_category_has_examples() {
        for c in RiskCategory::all() {
            assert!(!c.examples().is_empty(), "{c} has no examples");
            assert!(c.title().ends_with("Risk"));
        }
    }
}
