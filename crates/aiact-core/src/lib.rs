//! # aiact-core - Foundational Types for the Compliance Stack
//!
//! Defines the data model shared by the analyzer, the HTTP service and the
//! CLI: the AI system description, the closed enums it is built from, risk
//! tiers, requirement assessments, recommendations and the final report.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for every taxonomy.** Domains, data types, deployment
//!    contexts, statuses and priorities are exhaustive `match` targets.
//!    Adding a variant is a compile error until every rule handles it.
//!
//! 2. **Wire form equals `as_str()`.** Every enum serializes as snake_case,
//!    and `FromStr` accepts exactly the same strings.
//!
//! 3. **Validation lives at the boundary.** [`SystemDescription::validate`]
//!    is called by request handlers; the analyzer trusts its input.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aiact-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The `openapi` feature derives `utoipa::ToSchema` for the HTTP layer.

pub mod assessment;
pub mod domain;
pub mod error;
pub mod recommendation;
pub mod report;
pub mod risk;
pub mod system;

// Re-export primary types for ergonomic imports.
pub use assessment::{ComplianceStatus, RequirementAssessment, RequirementRecord};
pub use domain::{
    ApplicationDomain, DataType, DeploymentContext, DevelopmentStage, APPLICATION_DOMAIN_COUNT,
};
pub use error::{AnalysisError, ValidationError};
pub use recommendation::{Priority, Recommendation};
pub use report::{ComplianceReport, ConfidenceLevel, ANALYSIS_VERSION};
pub use risk::RiskCategory;
pub use system::{
    DescriptionLimits, SystemDescription, DEFAULT_MAX_DESCRIPTION_LENGTH,
    DEFAULT_MIN_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};
