//! Multi-phase remediation plans used by the detailed synthesis strategy.
//!
//! Each function builds one fully populated [`Recommendation`]. Plan text
//! embeds the system's primary domain where the remediation depends on it.

use aiact_core::{ApplicationDomain, Priority, Recommendation};

pub const RISK_FRAMEWORK_TITLE: &str = "Establish Risk Management Framework";
pub const RISK_AUDIT_TITLE: &str = "Risk Management System Audit";
pub const DATA_GOVERNANCE_TITLE: &str = "Comprehensive Data Governance Program";
pub const AI_DISCLOSURE_TITLE: &str = "AI Disclosure Implementation - Complete UX Design";
pub const GDPR_PROGRAM_TITLE: &str = "GDPR-AI Integration Compliance Program";
pub const EMPLOYMENT_FAIRNESS_TITLE: &str = "Employment AI - Bias Mitigation & Fairness Testing";
pub const HEALTHCARE_VALIDATION_TITLE: &str = "Healthcare AI - Clinical Validation & Safety";

pub fn risk_management_framework(domain: ApplicationDomain) -> Recommendation {
    let description = format!(
        "\
STEP-BY-STEP IMPLEMENTATION:

1. RISK IDENTIFICATION (Week 1-2):
   - Document all potential risks for {domain} AI systems
   - Identify bias, discrimination, privacy, security and safety risks
   - Map risks to potential harms to individuals and groups
   - Tools: risk assessment templates, stakeholder workshops

2. RISK ASSESSMENT (Week 2-3):
   - Quantify likelihood and severity of each identified risk (1-5 scale)
   - Consider residual risk after current mitigation measures

3. RISK MITIGATION (Week 3-6):
   - Design specific controls for each high and medium risk
   - Implement technical measures (input validation, output filtering)
   - Establish procedural controls (human oversight, escalation)
   - Document every mitigation strategy

4. MONITORING AND REVIEW (Ongoing):
   - Automated monitoring dashboards
   - Quarterly risk reviews
   - Re-assess whenever the system changes

DELIVERABLES:
   - Risk Management Plan (30-50 pages)
   - Risk Register with 20+ identified risks
   - Mitigation Controls Matrix
   - Monitoring Dashboard

ESTIMATED COST: EUR 25,000-50,000
RESPONSIBLE: Chief Risk Officer + AI Team
EXTERNAL HELP: EU AI Act consultant, 40-60 hours"
    );
    Recommendation::new(
        RISK_FRAMEWORK_TITLE,
        description,
        Priority::Critical,
        "governance",
        "4-6 weeks",
        "Must complete before system deployment",
        &["art9"],
    )
}

pub fn risk_management_audit(domain: ApplicationDomain) -> Recommendation {
    let description = format!(
        "\
THIRD-PARTY VALIDATION PLAN:

1. SELECT AUDITOR (Week 1):
   - Choose an EU AI Act certified consultant
   - Require expertise in the {domain} domain
   - Verify ISO 27001 / ISO 31000 risk management experience

2. AUDIT SCOPE (Week 2):
   - Review risk management documentation
   - Test completeness of risk identification
   - Validate mitigation effectiveness
   - Check monitoring systems

3. REMEDIATION (Week 3-4):
   - Address audit findings
   - Close documentation gaps
   - Strengthen weak controls

EXPECTED FINDINGS:
   - 5-10 documentation gaps
   - 2-3 control weaknesses

COST BREAKDOWN:
   - Audit fees: EUR 15,000-25,000
   - Remediation work: EUR 10,000-15,000
   - Follow-up assessment: EUR 5,000"
    );
    Recommendation::new(
        RISK_AUDIT_TITLE,
        description,
        Priority::High,
        "audit",
        "3-4 weeks",
        "After risk framework completion",
        &["art9", "art43"],
    )
}

/// Domain-specific data handling line for the data governance plan.
fn data_governance_domain_line(domain: ApplicationDomain) -> &'static str {
    match domain {
        ApplicationDomain::Healthcare => "Healthcare data anonymization (HIPAA + GDPR compliance)",
        ApplicationDomain::Finance => "Financial data protection (PCI DSS compliance)",
        ApplicationDomain::Employment => "Employment data bias testing (multiple protected classes)",
        _ => "Apply sector data protection rules where they exist",
    }
}

pub fn data_governance_program(domain: ApplicationDomain) -> Recommendation {
    let description = format!(
        "\
DATA QUALITY IMPLEMENTATION ROADMAP:

PHASE 1 - DATA INVENTORY (Week 1-2):
   - Catalog all training, validation and test datasets
   - Document data sources, collection methods and dates
   - Map personal data elements
   - Assess how representative the data is of the target population

PHASE 2 - BIAS TESTING (Week 3-4):
   - Statistical bias analysis across protected characteristics
   - Performance disparity testing (accuracy, false positive rates)
   - Intersectional bias analysis

PHASE 3 - DATA QUALITY CONTROLS (Week 4-6):
   - Data validation pipelines
   - Outlier detection
   - Data drift monitoring
   - Version control for datasets

PHASE 4 - DOCUMENTATION (Week 6-8):
   - Data sheets for each dataset
   - Data lineage documentation
   - Bias testing reports
   - Data governance procedures

SPECIFIC FOR {upper} DOMAIN:
   - {line}

DELIVERABLES:
   - Data Governance Policy (20+ pages)
   - Bias Testing Report with statistical analysis
   - Data Quality Dashboard
   - Dataset Documentation Package

TOTAL BUDGET: EUR 75,000-115,000",
        upper = domain.as_str().to_uppercase(),
        line = data_governance_domain_line(domain),
    );
    Recommendation::new(
        DATA_GOVERNANCE_TITLE,
        description,
        Priority::Critical,
        "data",
        "6-8 weeks",
        "Before model training completion",
        &["art10"],
    )
}

pub fn ai_disclosure() -> Recommendation {
    let description = "\
TRANSPARENCY IMPLEMENTATION PLAN:

PHASE 1 - LEGAL COMPLIANCE (Week 1):
   - Draft disclosure text with the legal team
   - Review GDPR Article 22 requirements
   - Check local consumer protection law

PHASE 2 - UX DESIGN (Week 1-2):
   - Design a clear, prominent AI disclosure
   - A/B test disclosure formats
   - Meet WCAG 2.1 AA accessibility
   - Test with diverse user groups

DISCLOSURE EXAMPLES:
   \"You're chatting with an AI assistant\"
   \"This is an automated AI service\"
   \"AI-powered chat - human agents available if needed\"

IMPLEMENTATION CHECKLIST:
   - Disclosure appears within 3 seconds of interaction
   - Visible on all conversation interfaces
   - Available in every language served
   - Screen reader compatible
   - Cannot be easily dismissed or hidden
   - Offers a human contact where applicable

TECHNICAL IMPLEMENTATION:
   - Frontend: disclosure component in the chat widget
   - Backend: log disclosure acknowledgments
   - Testing: automated compliance checks

TOTAL COST: EUR 12,000-19,000
RESPONSIBLE: Product + Legal + UX teams";
    Recommendation::new(
        AI_DISCLOSURE_TITLE,
        description,
        Priority::High,
        "transparency",
        "2 weeks",
        "Before customer-facing deployment",
        &["art52"],
    )
}

pub fn gdpr_integration_program() -> Recommendation {
    let description = "\
GDPR + AI ACT COMBINED COMPLIANCE:

PHASE 1 - DATA MAPPING (Week 1-2):
   - Map all personal data flows in the AI system
   - Identify data controllers and processors
   - Document international data transfers
   - Assess special category data usage

PHASE 2 - LEGAL BASIS ANALYSIS (Week 2-3):
   - Establish a lawful basis for each processing activity
   - Document legitimate interest assessments
   - Review consent mechanisms
   - Ensure Article 22 compliance for automated decisions

PHASE 3 - DATA SUBJECT RIGHTS (Week 3-5):
   - Right of access procedures
   - Data portability mechanisms
   - Erasure workflows
   - Rectification handling

PHASE 4 - ACCOUNTABILITY (Week 5-6):
   - Data Protection Impact Assessment (DPIA)
   - Records of processing (Article 30)
   - Data processor agreements
   - Breach notification procedures

AI-SPECIFIC GDPR CONSIDERATIONS:
   - Algorithmic transparency
   - Automated decision-making safeguards
   - Data minimization for training
   - Model explainability

TOTAL COST: EUR 70,000-110,000";
    Recommendation::new(
        GDPR_PROGRAM_TITLE,
        description,
        Priority::Critical,
        "privacy",
        "5-6 weeks",
        "Before processing any personal data",
        &["gdpr", "art22"],
    )
}

pub fn employment_fairness() -> Recommendation {
    let description = "\
EMPLOYMENT AI SPECIFIC COMPLIANCE:

BIAS TESTING REQUIREMENTS:
   - Discrimination tests across gender, race, age and disability status
   - Intersectional bias (e.g. age + gender)
   - Geographic bias (postal code discrimination)

FAIRNESS METRICS:
   - Equal opportunity (false negative rate parity)
   - Predictive parity (precision parity)
   - Calibration (outcome base rates)
   - Individual fairness (similar candidates get similar scores)

AUDIT PROCEDURES:
   - Monthly bias testing with new data
   - Annual third-party fairness audit
   - Adverse impact analysis (80% rule)

TRANSPARENCY FOR CANDIDATES:
   - Disclose AI use in job postings
   - Explain decision factors
   - Offer human review and an appeals process

COST: EUR 50,000-80,000
TIMELINE: 3-4 months for full implementation";
    Recommendation::new(
        EMPLOYMENT_FAIRNESS_TITLE,
        description,
        Priority::Critical,
        "fairness",
        "12-16 weeks",
        "Before any hiring decisions",
        &["art14", "gdpr_art22"],
    )
}

pub fn healthcare_validation() -> Recommendation {
    let description = "\
HEALTHCARE AI COMPLIANCE PROGRAM:

CLINICAL VALIDATION:
   - Clinical studies of AI performance
   - Statistical validation with diverse patient populations
   - Comparison with standard of care
   - Real-world evidence collection

MEDICAL DEVICE REGULATION (MDR):
   - CE marking process (12-18 months)
   - Clinical evidence requirements
   - Post-market surveillance plan
   - Risk management per ISO 14971

SAFETY REQUIREMENTS:
   - Patient safety monitoring
   - Adverse event reporting
   - Human oversight protocols

ESTIMATED COSTS:
   - Clinical studies: EUR 200,000-500,000
   - CE marking: EUR 100,000-300,000
   - Quality management system: EUR 50,000-100,000

TIMELINE: 18-24 months for full market authorization";
    Recommendation::new(
        HEALTHCARE_VALIDATION_TITLE,
        description,
        Priority::Critical,
        "clinical",
        "18-24 months",
        "Before clinical deployment",
        &["mdr", "art43"],
    )
}
