//! End-to-end CLI workflows through the library API: config loading,
//! sample analysis with a saved digest, and file analysis.

use std::collections::BTreeMap;

use aiact_analyzer::{ComplianceAnalyzer, SynthesisStrategy};
use aiact_cli::analyze::analyze_file;
use aiact_cli::config::load_analyzer_config;
use aiact_cli::demo::{analyze_samples, digests, save_digests, DemoTarget};
use aiact_cli::render::ReportDigest;
use aiact_cli::samples::Sample;
use aiact_core::RiskCategory;

#[test]
fn configured_demo_saves_digest_for_all_samples() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("aiact.yaml");
    std::fs::write(&config_path, "synthesis: basic\n").unwrap();

    let config = load_analyzer_config(Some(&config_path)).unwrap();
    assert_eq!(config.synthesis, SynthesisStrategy::Basic);
    let analyzer = ComplianceAnalyzer::new(config);

    let runs = analyze_samples(DemoTarget::All, &analyzer).unwrap();
    assert!(runs.iter().all(|r| r.report.recommendations.len() <= 10));

    let out = dir.path().join("results.json");
    save_digests(&out, &digests(&runs)).unwrap();
    let saved: BTreeMap<String, ReportDigest> =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved.len(), 3);
    assert_eq!(saved["chatbot"].risk_category, RiskCategory::Limited);
    assert_eq!(saved["medical"].risk_category, RiskCategory::High);
}

#[test]
fn sample_written_to_yaml_analyzes_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medical.yaml");
    let system = Sample::Medical.system();
    std::fs::write(&path, serde_yaml::to_string(&system).unwrap()).unwrap();

    let analyzer = ComplianceAnalyzer::default();
    let (loaded, report) = analyze_file(&path, &analyzer).unwrap();
    assert_eq!(loaded, system);

    let direct = analyzer.analyze(&system).unwrap();
    assert_eq!(report.risk_category, direct.risk_category);
    assert_eq!(report.compliance_score, direct.compliance_score);
    assert_eq!(report.requirement_ids(), direct.requirement_ids());
}

#[test]
fn unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = analyze_file(&missing, &ComplianceAnalyzer::default()).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
