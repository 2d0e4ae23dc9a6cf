//! # Analyzer Configuration
//!
//! Explicit configuration handed to [`ComplianceAnalyzer::new`](crate::ComplianceAnalyzer::new).
//! Deserializable from YAML or JSON with per-field defaults, so a config
//! file only needs to name the fields it overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use aiact_core::{
    DescriptionLimits, ValidationError, DEFAULT_MAX_DESCRIPTION_LENGTH,
    DEFAULT_MIN_DESCRIPTION_LENGTH,
};

/// Recommendation synthesis variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisStrategy {
    /// Multi-phase remediation plans per requirement and domain. Cap 15.
    #[default]
    Detailed,
    /// One "Address {title}" record per raw assessor hint. Cap 10.
    Basic,
}

impl SynthesisStrategy {
    /// Maximum number of recommendations kept after sorting.
    pub fn recommendation_cap(self) -> usize {
        match self {
            Self::Detailed => 15,
            Self::Basic => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for SynthesisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SynthesisStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detailed" => Ok(Self::Detailed),
            "basic" => Ok(Self::Basic),
            other => Err(ValidationError::UnknownVariant {
                kind: "synthesis strategy",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for a [`ComplianceAnalyzer`](crate::ComplianceAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Minimum description length in characters.
    pub min_description_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
    /// Recommendation synthesis variant.
    pub synthesis: SynthesisStrategy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            synthesis: SynthesisStrategy::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Description bounds for request validation.
    pub fn description_limits(&self) -> DescriptionLimits {
        DescriptionLimits {
            min: self.min_description_length,
            max: self.max_description_length,
        }
    }
}
