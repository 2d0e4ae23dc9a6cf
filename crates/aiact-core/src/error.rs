//! # Error Types - Structured Error Hierarchy
//!
//! Defines the error types shared by every crate in the workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - [`ValidationError`] covers malformed input. It is raised by the
//!   request-validation boundary (HTTP layer, CLI loader) before the
//!   analyzer is invoked. The analyzer itself never re-validates.
//! - [`AnalysisError`] is the single "analysis failed" condition. The
//!   rule-set is deterministic, so callers must treat it as non-retryable
//!   until the input changes.

use thiserror::Error;

/// Input rejected by [`SystemDescription::validate`](crate::SystemDescription::validate)
/// or by parsing one of the closed enums from its string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description shorter than the configured minimum.
    #[error("AI system description must be at least {min} characters (got {actual})")]
    DescriptionTooShort {
        /// Configured minimum length in characters.
        min: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// Description longer than the configured maximum.
    #[error("AI system description exceeds maximum length of {max} (got {actual})")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// System name is empty or whitespace.
    #[error("AI system name must not be empty")]
    EmptyName,

    /// System name exceeds 200 characters.
    #[error("AI system name exceeds maximum length of {max} (got {actual})")]
    NameTooLong {
        /// Maximum length in characters.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// `ai_techniques` is empty.
    #[error("at least one AI technique must be specified")]
    EmptyTechniques,

    /// `data_types` is empty.
    #[error("at least one data type must be specified")]
    EmptyDataTypes,

    /// A string did not name any variant of a closed enum.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// Enum being parsed, e.g. `"application domain"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Internal fault detected while assembling a compliance report.
///
/// Never produced for structurally valid input under the current rule-set;
/// surfaced instead of returning a partial or corrupt report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Requirement selection produced no requirements.
    #[error("no applicable requirements were selected for risk category {0}")]
    NoRequirements(String),

    /// Aggregated score escaped the unit interval.
    #[error("compliance score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),
}
