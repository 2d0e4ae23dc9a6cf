//! # Requirement Catalog
//!
//! Static, compiled-in table of the regulatory obligations the analyzer
//! knows about, and the selector that picks the applicable subset for a
//! risk tier.
//!
//! | Tier           | Tier-specific            | Cross-cutting                    |
//! |----------------|--------------------------|----------------------------------|
//! | `unacceptable` | art5                     | (none)                           |
//! | `high`         | art9 … art14             | gdpr_compliance, cybersecurity   |
//! | `limited`      | art52                    | gdpr_compliance, cybersecurity   |
//! | `minimal`      | (none)                   | gdpr_compliance, cybersecurity   |

use aiact_core::{RequirementRecord, RiskCategory, SystemDescription};

pub const ART5: RequirementRecord = RequirementRecord {
    id: "art5",
    title: "Article 5 - Prohibited AI Practices",
    description: "AI systems with unacceptable risk are prohibited",
    mandatory: true,
};

pub const ART9: RequirementRecord = RequirementRecord {
    id: "art9",
    title: "Article 9 - Risk Management System",
    description: "Establish, implement and maintain risk management system",
    mandatory: true,
};

pub const ART10: RequirementRecord = RequirementRecord {
    id: "art10",
    title: "Article 10 - Data and Data Governance",
    description: "Training, validation and testing data must meet quality criteria",
    mandatory: true,
};

pub const ART11: RequirementRecord = RequirementRecord {
    id: "art11",
    title: "Article 11 - Technical Documentation",
    description: "Draw up technical documentation demonstrating compliance",
    mandatory: true,
};

pub const ART12: RequirementRecord = RequirementRecord {
    id: "art12",
    title: "Article 12 - Record-keeping",
    description: "Keep logs automatically generated by high-risk AI systems",
    mandatory: true,
};

pub const ART13: RequirementRecord = RequirementRecord {
    id: "art13",
    title: "Article 13 - Transparency and Information to Users",
    description: "Ensure sufficient transparency for users to interpret output",
    mandatory: true,
};

pub const ART14: RequirementRecord = RequirementRecord {
    id: "art14",
    title: "Article 14 - Human Oversight",
    description: "Ensure appropriate human oversight measures",
    mandatory: true,
};

pub const ART52: RequirementRecord = RequirementRecord {
    id: "art52",
    title: "Article 52 - Transparency Obligations",
    description: "Inform users they are interacting with AI system",
    mandatory: true,
};

pub const GDPR_COMPLIANCE: RequirementRecord = RequirementRecord {
    id: "gdpr_compliance",
    title: "GDPR Compliance",
    description: "Ensure compliance with GDPR for personal data processing",
    mandatory: true,
};

pub const CYBERSECURITY: RequirementRecord = RequirementRecord {
    id: "cybersecurity",
    title: "Cybersecurity Measures",
    description: "Implement appropriate cybersecurity measures",
    mandatory: false,
};

const PROHIBITED: &[RequirementRecord] = &[ART5];
const HIGH_RISK: &[RequirementRecord] = &[ART9, ART10, ART11, ART12, ART13, ART14];
const TRANSPARENCY: &[RequirementRecord] = &[ART52];
const CROSS_CUTTING: &[RequirementRecord] = &[GDPR_COMPLIANCE, CYBERSECURITY];

/// Every catalog entry, in table order.
pub fn all() -> impl Iterator<Item = &'static RequirementRecord> {
    PROHIBITED
        .iter()
        .chain(HIGH_RISK)
        .chain(TRANSPARENCY)
        .chain(CROSS_CUTTING)
}

/// Catalog entry by identifier.
pub fn find(id: &str) -> Option<&'static RequirementRecord> {
    all().find(|r| r.id == id)
}

/// Tier-specific requirements, before cross-cutting entries.
fn tier_requirements(risk: RiskCategory) -> &'static [RequirementRecord] {
    match risk {
        RiskCategory::Unacceptable => PROHIBITED,
        RiskCategory::High => HIGH_RISK,
        RiskCategory::Limited => TRANSPARENCY,
        RiskCategory::Minimal => &[],
    }
}

/// Applicable requirements for a system in the given tier.
///
/// Tier-specific entries come first, cross-cutting entries last. Prohibited
/// systems get only the prohibition. The `system` argument is unused by the
/// current table; it is what future data-type-dependent entries will key on.
pub fn select(_system: &SystemDescription, risk: RiskCategory) -> Vec<RequirementRecord> {
    let mut selected = tier_requirements(risk).to_vec();
    if risk != RiskCategory::Unacceptable {
        selected.extend_from_slice(CROSS_CUTTING);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::system;
    use aiact_core::ApplicationDomain;
    use std::collections::HashSet;

    fn ids(risk: RiskCategory) -> Vec<&'static str> {
        let s = system(ApplicationDomain::Other, "Generic system description.");
        select(&s, risk).iter().map(|r| r.id).collect()
    }

    #[test]
    fn unacceptable_gets_prohibition_only() {
        assert_eq!(ids(RiskCategory::Unacceptable), vec!["art5"]);
    }

    #[test]
    fn high_risk_set_in_order() {
        assert_eq!(
            ids(RiskCategory::High),
            vec![
                "art9",
                "art10",
                "art11",
                "art12",
                "art13",
                "art14",
                "gdpr_compliance",
                "cybersecurity"
            ]
        );
    }

    #[test]
    fn high_never_contains_art5_or_art52() {
        let got = ids(RiskCategory::High);
        assert!(!got.contains(&"art5"));
        assert!(!got.contains(&"art52"));
    }

    #[test]
    fn limited_and_minimal() {
        assert_eq!(
            ids(RiskCategory::Limited),
            vec!["art52", "gdpr_compliance", "cybersecurity"]
        );
        assert_eq!(ids(RiskCategory::Minimal), vec!["gdpr_compliance", "cybersecurity"]);
    }

    #[test]
    fn gdpr_present_for_all_but_unacceptable() {
        for &risk in RiskCategory::all() {
            let has = ids(risk).contains(&"gdpr_compliance");
            assert_eq!(has, risk != RiskCategory::Unacceptable, "{risk}");
        }
    }

    #[test]
    fn selection_has_no_duplicates() {
        for &risk in RiskCategory::all() {
            let got = ids(risk);
            let unique: HashSet<_> = got.iter().collect();
            assert_eq!(unique.len(), got.len(), "{risk}");
            assert!(!got.is_empty());
        }
    }

    #[test]
    fn cybersecurity_is_optional() {
        assert!(!CYBERSECURITY.mandatory);
        assert!(all().filter(|r| r.id != "cybersecurity").all(|r| r.mandatory));
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("art9").map(|r| r.title), Some("Article 9 - Risk Management System"));
        assert!(find("art99").is_none());
        assert_eq!(all().count(), 10);
    }
}
