//! # Risk Classifier
//!
//! Maps a system description and primary domain to a [`RiskCategory`].
//!
//! ## Rules (first match wins)
//!
//! 1. Description contains a prohibited-practice keyword → `Unacceptable`.
//! 2. Domain is one of the seven high-risk domains → `High`.
//! 3. Description contains a limited-risk keyword → `Limited`.
//! 4. Domain is healthcare or finance → `High` if the description
//!    contains a decision-making keyword, otherwise `Limited`.
//! 5. Otherwise → `Minimal`.
//!
//! Keyword checks are substring matches on the lower-cased description,
//! not token matches: "decisionmaker" matches "decision".

use aiact_core::{ApplicationDomain, RiskCategory, SystemDescription};

/// Prohibited-practice indicators.
pub const UNACCEPTABLE_KEYWORDS: &[&str] = &[
    "social scoring",
    "social credit",
    "subliminal",
    "manipulation",
    "real-time biometric identification",
    "public space surveillance",
    "emotion recognition workplace",
    "emotion recognition education",
];

/// Transparency-obligation indicators.
pub const LIMITED_RISK_KEYWORDS: &[&str] = &[
    "chatbot",
    "conversational ai",
    "emotion recognition",
    "biometric categorization",
    "generated content",
    "deepfake",
];

/// Automated decision-making indicators for healthcare and finance.
pub const DECISION_KEYWORDS: &[&str] = &["decision", "approval", "rejection", "assessment", "scoring"];

/// Whether the domain is unconditionally high-risk.
pub fn is_high_risk_domain(domain: ApplicationDomain) -> bool {
    match domain {
        ApplicationDomain::CriticalInfrastructure
        | ApplicationDomain::Education
        | ApplicationDomain::Employment
        | ApplicationDomain::EssentialServices
        | ApplicationDomain::LawEnforcement
        | ApplicationDomain::MigrationAsylum
        | ApplicationDomain::JusticeDemocracy => true,
        ApplicationDomain::BiometricIdentification
        | ApplicationDomain::Healthcare
        | ApplicationDomain::Finance
        | ApplicationDomain::Transport
        | ApplicationDomain::Energy
        | ApplicationDomain::SocialMedia
        | ApplicationDomain::Gaming
        | ApplicationDomain::GeneralPurpose
        | ApplicationDomain::Other => false,
    }
}

/// Whether the domain's tier depends on decision-making keywords.
pub fn is_decision_sensitive_domain(domain: ApplicationDomain) -> bool {
    matches!(domain, ApplicationDomain::Healthcare | ApplicationDomain::Finance)
}

/// First keyword from `keywords` contained in `text`.
fn first_match(text: &str, keywords: &'static [&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|k| text.contains(k))
}

/// Classify a system into a risk tier. Pure and deterministic.
pub fn classify(system: &SystemDescription) -> RiskCategory {
    let text = system.description.to_lowercase();

    if let Some(keyword) = first_match(&text, UNACCEPTABLE_KEYWORDS) {
        tracing::debug!(system_id = %system.id, keyword, "prohibited practice indicator");
        return RiskCategory::Unacceptable;
    }

    if is_high_risk_domain(system.domain) {
        return RiskCategory::High;
    }

    if let Some(keyword) = first_match(&text, LIMITED_RISK_KEYWORDS) {
        tracing::debug!(system_id = %system.id, keyword, "limited risk indicator");
        return RiskCategory::Limited;
    }

    if is_decision_sensitive_domain(system.domain) {
        return match first_match(&text, DECISION_KEYWORDS) {
            Some(_) => RiskCategory::High,
            None => RiskCategory::Limited,
        };
    }

    RiskCategory::Minimal
}
