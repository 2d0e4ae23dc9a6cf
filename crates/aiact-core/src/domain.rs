//! # Application Domains & System Attributes
//!
//! Closed enums describing where and how an AI system operates. Every
//! domain/category membership check in the analyzer is an exhaustive
//! `match` over these variants, so adding a variant forces every rule to
//! be revisited at compile time.
//!
//! All enums serialize as their snake_case string form, parse from the
//! same string via [`FromStr`], and list their variants in canonical order
//! through `all()`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// ApplicationDomain
// ---------------------------------------------------------------------------

/// Primary application domain of an AI system.
///
/// | # | Domain | Description |
/// |---|--------|-------------|
/// |  1 | BiometricIdentification | Biometric identification and verification |
/// |  2 | CriticalInfrastructure | Critical infrastructure safety and security |
/// |  3 | Education | Educational and vocational training |
/// |  4 | Employment | Employment, worker management, recruitment |
/// |  5 | EssentialServices | Access to essential private and public services |
/// |  6 | LawEnforcement | Law enforcement |
/// |  7 | MigrationAsylum | Migration, asylum and border control |
/// |  8 | JusticeDemocracy | Administration of justice, democratic processes |
/// |  9 | Healthcare | Healthcare and medical applications |
/// | 10 | Finance | Financial services and credit assessment |
/// | 11 | Transport | Transportation and autonomous vehicles |
/// | 12 | Energy | Energy grid and utilities |
/// | 13 | SocialMedia | Social media and content platforms |
/// | 14 | Gaming | Gaming and entertainment |
/// | 15 | GeneralPurpose | General purpose AI systems |
/// | 16 | Other | Anything not listed above |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ApplicationDomain {
    BiometricIdentification,
    CriticalInfrastructure,
    Education,
    Employment,
    EssentialServices,
    LawEnforcement,
    MigrationAsylum,
    JusticeDemocracy,
    Healthcare,
    Finance,
    Transport,
    Energy,
    SocialMedia,
    Gaming,
    GeneralPurpose,
    Other,
}

/// Total number of application domains.
pub const APPLICATION_DOMAIN_COUNT: usize = 16;

impl ApplicationDomain {
    /// Returns all 16 domains in canonical order.
    pub fn all() -> &'static [ApplicationDomain] {
        &[
            Self::BiometricIdentification,
            Self::CriticalInfrastructure,
            Self::Education,
            Self::Employment,
            Self::EssentialServices,
            Self::LawEnforcement,
            Self::MigrationAsylum,
            Self::JusticeDemocracy,
            Self::Healthcare,
            Self::Finance,
            Self::Transport,
            Self::Energy,
            Self::SocialMedia,
            Self::Gaming,
            Self::GeneralPurpose,
            Self::Other,
        ]
    }

    /// Returns the snake_case identifier, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BiometricIdentification => "biometric_identification",
            Self::CriticalInfrastructure => "critical_infrastructure",
            Self::Education => "education",
            Self::Employment => "employment",
            Self::EssentialServices => "essential_services",
            Self::LawEnforcement => "law_enforcement",
            Self::MigrationAsylum => "migration_asylum",
            Self::JusticeDemocracy => "justice_democracy",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Transport => "transport",
            Self::Energy => "energy",
            Self::SocialMedia => "social_media",
            Self::Gaming => "gaming",
            Self::GeneralPurpose => "general_purpose",
            Self::Other => "other",
        }
    }

    /// Human-readable description, as listed by the domains endpoint.
    pub fn description(&self) -> &'static str {
        match self {
            Self::BiometricIdentification => "Biometric identification and verification systems",
            Self::CriticalInfrastructure => "Critical infrastructure safety and security",
            Self::Education => "Educational and vocational training systems",
            Self::Employment => "Employment, worker management, and recruitment",
            Self::EssentialServices => "Essential private and public services access",
            Self::LawEnforcement => "Law enforcement applications",
            Self::MigrationAsylum => "Migration, asylum and border control",
            Self::JusticeDemocracy => "Administration of justice and democratic processes",
            Self::Healthcare => "Healthcare and medical applications",
            Self::Finance => "Financial services and credit assessment",
            Self::Transport => "Transportation and autonomous vehicles",
            Self::Energy => "Energy grid and utilities management",
            Self::SocialMedia => "Social media and content platforms",
            Self::Gaming => "Gaming and entertainment",
            Self::GeneralPurpose => "General purpose AI systems",
            Self::Other => "Other applications not listed above",
        }
    }
}

impl fmt::Display for ApplicationDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationDomain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "application domain",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// DataType
// ---------------------------------------------------------------------------

/// Category of data processed by an AI system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    PersonalData,
    BiometricData,
    HealthData,
    FinancialData,
    BehavioralData,
    LocationData,
    CommunicationData,
    AudioVisual,
    TextDocuments,
    SensorData,
    PublicData,
}

impl DataType {
    /// Returns all 11 data types in canonical order.
    pub fn all() -> &'static [DataType] {
        &[
            Self::PersonalData,
            Self::BiometricData,
            Self::HealthData,
            Self::FinancialData,
            Self::BehavioralData,
            Self::LocationData,
            Self::CommunicationData,
            Self::AudioVisual,
            Self::TextDocuments,
            Self::SensorData,
            Self::PublicData,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalData => "personal_data",
            Self::BiometricData => "biometric_data",
            Self::HealthData => "health_data",
            Self::FinancialData => "financial_data",
            Self::BehavioralData => "behavioral_data",
            Self::LocationData => "location_data",
            Self::CommunicationData => "communication_data",
            Self::AudioVisual => "audio_visual",
            Self::TextDocuments => "text_documents",
            Self::SensorData => "sensor_data",
            Self::PublicData => "public_data",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "data type",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// DeploymentContext
// ---------------------------------------------------------------------------

/// Where the AI system is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DeploymentContext {
    PublicSpace,
    Workplace,
    EducationalInstitution,
    HealthcareFacility,
    OnlinePlatform,
    MobileApplication,
    EmbeddedSystem,
    CloudService,
    PrivateUse,
}

impl DeploymentContext {
    /// Returns all 9 deployment contexts in canonical order.
    pub fn all() -> &'static [DeploymentContext] {
        &[
            Self::PublicSpace,
            Self::Workplace,
            Self::EducationalInstitution,
            Self::HealthcareFacility,
            Self::OnlinePlatform,
            Self::MobileApplication,
            Self::EmbeddedSystem,
            Self::CloudService,
            Self::PrivateUse,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicSpace => "public_space",
            Self::Workplace => "workplace",
            Self::EducationalInstitution => "educational_institution",
            Self::HealthcareFacility => "healthcare_facility",
            Self::OnlinePlatform => "online_platform",
            Self::MobileApplication => "mobile_application",
            Self::EmbeddedSystem => "embedded_system",
            Self::CloudService => "cloud_service",
            Self::PrivateUse => "private_use",
        }
    }
}

impl fmt::Display for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentContext {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "deployment context",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// DevelopmentStage
// ---------------------------------------------------------------------------

/// Lifecycle stage of the AI system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentStage {
    Concept,
    Development,
    Testing,
    Production,
    Discontinued,
}

impl DevelopmentStage {
    pub fn all() -> &'static [DevelopmentStage] {
        &[
            Self::Concept,
            Self::Development,
            Self::Testing,
            Self::Production,
            Self::Discontinued,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
            Self::Discontinued => "discontinued",
        }
    }
}

impl fmt::Display for DevelopmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DevelopmentStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "development stage",
                value: s.to_string(),
            })
    }
}
