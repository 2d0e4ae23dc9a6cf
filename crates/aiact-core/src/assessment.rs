//! # Requirements & Assessments
//!
//! [`RequirementRecord`] is a compiled-in catalog entry; it is selected,
//! never mutated. [`RequirementAssessment`] is the per-analysis outcome for
//! one requirement, created once and never modified afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// ComplianceStatus
// ---------------------------------------------------------------------------

/// Compliance status of one requirement.
///
/// The current rule-set never emits `Compliant` or `NonCompliant`; they
/// remain part of the taxonomy so scoring and synthesis handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    PartiallyCompliant,
    RequiresReview,
    NotApplicable,
}

impl ComplianceStatus {
    pub fn all() -> &'static [ComplianceStatus] {
        &[
            Self::Compliant,
            Self::NonCompliant,
            Self::PartiallyCompliant,
            Self::RequiresReview,
            Self::NotApplicable,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
            Self::PartiallyCompliant => "partially_compliant",
            Self::RequiresReview => "requires_review",
            Self::NotApplicable => "not_applicable",
        }
    }

    /// Whether this status represents an open gap (non-compliant or
    /// awaiting review).
    pub fn is_open_gap(self) -> bool {
        matches!(self, Self::NonCompliant | Self::RequiresReview)
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "compliance status",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// RequirementRecord
// ---------------------------------------------------------------------------

/// Static catalog entry for one regulatory obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequirementRecord {
    /// Stable identifier, e.g. `"art9"` or `"gdpr_compliance"`.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Whether the obligation is mandatory for the selected tier.
    pub mandatory: bool,
}

// ---------------------------------------------------------------------------
// RequirementAssessment
// ---------------------------------------------------------------------------

/// Evaluation outcome for one requirement against one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RequirementAssessment {
    /// Catalog identifier of the assessed requirement.
    pub requirement_id: String,
    pub title: String,
    pub description: String,
    pub status: ComplianceStatus,
    /// Why the status was assigned.
    pub rationale: String,
    /// Raw remediation hints; expanded by the recommendation synthesizer.
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Supporting evidence cited for the status, when any was supplied.
    #[serde(default)]
    pub evidence: Option<String>,
}

impl RequirementAssessment {
    /// Start an assessment for `requirement`, copying its catalog text.
    pub fn for_requirement(
        requirement: &RequirementRecord,
        status: ComplianceStatus,
        rationale: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            requirement_id: requirement.id.to_string(),
            title: requirement.title.to_string(),
            description: requirement.description.to_string(),
            status,
            rationale: rationale.into(),
            recommendations,
            evidence: None,
        }
    }
}
