//! # Recommendations
//!
//! Synthesized remediation actions. A recommendation is immutable once
//! built; its position in a report's list is significant (priority order).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Remediation priority.
///
/// Sort rank: critical (0) < high (1) < medium (2) < low (3). The enum is
/// closed, so an unrecognized priority is rejected at deserialization
/// rather than sorted last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Sort key used when ordering recommendations.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Critical or high.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

/// A prioritized remediation action tied to one or more requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recommendation {
    /// Generated identifier (UUID v4). Never used for ordering.
    pub id: String,
    pub title: String,
    /// Long-form description; may embed a multi-phase remediation plan.
    pub description: String,
    pub priority: Priority,
    /// Free-text classification (governance, data, privacy, fairness, ...).
    pub category: String,
    pub estimated_effort: String,
    pub timeline: String,
    /// Referenced requirement or article identifiers.
    #[serde(default)]
    pub references: Vec<String>,
}

impl Recommendation {
    /// Build a recommendation with a fresh identifier.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        category: impl Into<String>,
        estimated_effort: impl Into<String>,
        timeline: impl Into<String>,
        references: &[&str],
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            priority,
            category: category.into(),
            estimated_effort: estimated_effort.into(),
            timeline: timeline.into(),
            references: references.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order() {
        let ranks: Vec<u8> = Priority::all().iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn urgent_priorities() {
        assert!(Priority::Critical.is_urgent());
        assert!(Priority::High.is_urgent());
        assert!(!Priority::Medium.is_urgent());
        assert!(!Priority::Low.is_urgent());
    }

    #[test]
    fn unknown_priority_rejected() {
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
        assert!("URGENT".parse::<Priority>().is_err());
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Recommendation::new("t", "d", Priority::Low, "legal", "1 week", "soon", &["art9"]);
        let b = Recommendation::new("t", "d", Priority::Low, "legal", "1 week", "soon", &["art9"]);
        assert_ne!(a.id, b.id);
        assert_eq!(a.references, vec!["art9".to_string()]);
    }
}
