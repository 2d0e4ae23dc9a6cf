//! Built-in sample systems used by `aiact demo`.

use aiact_core::{
    ApplicationDomain, DataType, DeploymentContext, DevelopmentStage, SystemDescription,
};
use clap::ValueEnum;

/// One of the built-in sample systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Sample {
    /// Customer-service chatbot on an e-commerce site.
    Chatbot,
    /// Resume screening and candidate ranking.
    Hiring,
    /// Radiology image analysis.
    Medical,
}

impl Sample {
    pub fn all() -> &'static [Sample] {
        &[Self::Chatbot, Self::Hiring, Self::Medical]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chatbot => "chatbot",
            Self::Hiring => "hiring",
            Self::Medical => "medical",
        }
    }

    /// The sample's system description.
    pub fn system(self) -> SystemDescription {
        match self {
            Self::Chatbot => chatbot(),
            Self::Hiring => hiring(),
            Self::Medical => medical(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn chatbot() -> SystemDescription {
    SystemDescription {
        id: "sample-chatbot".to_string(),
        name: "Customer Service Chatbot".to_string(),
        description: "AI-powered chatbot for customer service inquiries on e-commerce website. \
            Uses natural language processing to understand customer questions and provide \
            automated responses. Does not make financial decisions or access sensitive data."
            .to_string(),
        domain: ApplicationDomain::GeneralPurpose,
        additional_domains: Vec::new(),
        ai_techniques: strings(&[
            "Natural Language Processing",
            "Intent Classification",
            "Response Generation",
        ]),
        data_types: vec![DataType::TextDocuments, DataType::PublicData],
        deployment_context: DeploymentContext::OnlinePlatform,
        target_users: "Website visitors and customers".to_string(),
        geographic_scope: strings(&["EU", "US"]),
        estimated_users: Some(10_000),
        development_stage: DevelopmentStage::Production,
        vendor_info: Some("Internal development team".to_string()),
        regulatory_context: None,
        risk_mitigation: None,
    }
}

fn hiring() -> SystemDescription {
    SystemDescription {
        id: "sample-hiring".to_string(),
        name: "Resume Screening System".to_string(),
        description: "AI system for automated resume screening and candidate ranking in \
            recruitment process. Analyzes resumes, extracts skills and experience, scores \
            candidates based on job requirements. Used to filter applications before human review."
            .to_string(),
        domain: ApplicationDomain::Employment,
        additional_domains: Vec::new(),
        ai_techniques: strings(&[
            "Text Analysis",
            "Machine Learning Classification",
            "Scoring Algorithms",
        ]),
        data_types: vec![DataType::PersonalData, DataType::TextDocuments],
        deployment_context: DeploymentContext::Workplace,
        target_users: "HR recruiters and hiring managers".to_string(),
        geographic_scope: strings(&["EU"]),
        estimated_users: Some(500),
        development_stage: DevelopmentStage::Production,
        vendor_info: Some("Third-party vendor: RecruitTech Solutions".to_string()),
        regulatory_context: None,
        risk_mitigation: None,
    }
}

fn medical() -> SystemDescription {
    SystemDescription {
        id: "sample-medical".to_string(),
        name: "Medical Image Analysis".to_string(),
        description: "AI system for analyzing medical images (X-rays, MRIs) to assist \
            radiologists in detecting anomalies and potential diseases. Provides probability \
            scores for various conditions but does not make final diagnostic decisions. \
            Requires physician oversight for all outputs."
            .to_string(),
        domain: ApplicationDomain::Healthcare,
        additional_domains: Vec::new(),
        ai_techniques: strings(&[
            "Computer Vision",
            "Deep Learning",
            "Medical Image Processing",
        ]),
        data_types: vec![
            DataType::HealthData,
            DataType::AudioVisual,
            DataType::PersonalData,
        ],
        deployment_context: DeploymentContext::HealthcareFacility,
        target_users: "Radiologists and medical professionals".to_string(),
        geographic_scope: strings(&["EU"]),
        estimated_users: Some(200),
        development_stage: DevelopmentStage::Testing,
        vendor_info: Some("MedAI Technologies".to_string()),
        regulatory_context: Some(
            "CE marking process initiated, GDPR compliance reviewed".to_string(),
        ),
        risk_mitigation: Some(
            "Human physician oversight required for all outputs, encrypted data storage, \
             access logs maintained"
                .to_string(),
        ),
    }
}
