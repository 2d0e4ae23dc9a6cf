//! Fixtures for unit tests.

use aiact_core::{
    ApplicationDomain, DataType, DeploymentContext, DevelopmentStage, SystemDescription,
};

/// Minimal valid system in `domain` with the given description.
pub(crate) fn system(domain: ApplicationDomain, description: &str) -> SystemDescription {
    SystemDescription {
        id: "sys-test".into(),
        name: "Test System".into(),
        description: description.into(),
        domain,
        additional_domains: vec![],
        ai_techniques: vec!["machine_learning".into()],
        data_types: vec![DataType::TextDocuments],
        deployment_context: DeploymentContext::CloudService,
        target_users: "internal staff".into(),
        geographic_scope: vec!["EU".into()],
        estimated_users: None,
        development_stage: DevelopmentStage::Development,
        vendor_info: None,
        regulatory_context: None,
        risk_mitigation: None,
    }
}
