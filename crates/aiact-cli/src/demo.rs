//! # Demo Subcommand
//!
//! Analyzes the built-in sample systems.
//!
//! ```bash
//! aiact demo                      # all samples, text output
//! aiact demo hiring -v            # one sample with requirement detail
//! aiact demo --json --save out.json
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use aiact_analyzer::ComplianceAnalyzer;
use aiact_core::{ComplianceReport, SystemDescription};

use crate::render::{render_report, rule, ReportDigest};
use crate::samples::Sample;

/// Which samples to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DemoTarget {
    Chatbot,
    Hiring,
    Medical,
    #[default]
    All,
}

impl DemoTarget {
    pub fn samples(self) -> Vec<Sample> {
        match self {
            Self::Chatbot => vec![Sample::Chatbot],
            Self::Hiring => vec![Sample::Hiring],
            Self::Medical => vec![Sample::Medical],
            Self::All => Sample::all().to_vec(),
        }
    }
}

/// Arguments for the demo subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Sample system to analyze.
    #[arg(value_enum, default_value_t = DemoTarget::All)]
    pub target: DemoTarget,

    /// Emit a JSON digest per system.
    #[arg(long)]
    pub json: bool,

    /// Write the JSON digest to this file instead of stdout.
    #[arg(long, requires = "json")]
    pub save: Option<PathBuf>,
}

/// One analyzed sample.
#[derive(Debug, Clone)]
pub struct DemoRun {
    pub sample: Sample,
    pub system: SystemDescription,
    pub report: ComplianceReport,
    pub elapsed_secs: f64,
}

/// Analyze every sample selected by `target`.
pub fn analyze_samples(target: DemoTarget, analyzer: &ComplianceAnalyzer) -> Result<Vec<DemoRun>> {
    target
        .samples()
        .into_iter()
        .map(|sample| {
            let system = sample.system();
            let start = Instant::now();
            let report = analyzer
                .analyze(&system)
                .with_context(|| format!("analysis of sample '{}' failed", sample.as_str()))?;
            Ok(DemoRun {
                sample,
                system,
                report,
                elapsed_secs: start.elapsed().as_secs_f64(),
            })
        })
        .collect()
}

/// JSON digests keyed by sample name.
pub fn digests(runs: &[DemoRun]) -> BTreeMap<String, ReportDigest> {
    runs.iter()
        .map(|run| (run.sample.as_str().to_string(), ReportDigest::from(&run.report)))
        .collect()
}

/// Write `digests` as pretty JSON to `path`.
pub fn save_digests(path: &Path, digests: &BTreeMap<String, ReportDigest>) -> Result<()> {
    let json = serde_json::to_string_pretty(digests).context("failed to serialize results")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// Execute the demo subcommand.
pub fn run_demo(args: &DemoArgs, analyzer: &ComplianceAnalyzer, verbose: bool) -> Result<u8> {
    println!("EU AI Act Compliance Bot - CLI Testing Tool");
    println!(
        "Analysis Date: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let runs = analyze_samples(args.target, analyzer)?;
    for run in &runs {
        print!(
            "{}",
            render_report(&run.system, &run.report, run.elapsed_secs, verbose)
        );
    }

    if args.json {
        let digests = digests(&runs);
        match &args.save {
            Some(path) => {
                save_digests(path, &digests)?;
                println!("\nResults saved to: {}", path.display());
            }
            None => {
                let json =
                    serde_json::to_string_pretty(&digests).context("failed to serialize results")?;
                println!("\nJSON OUTPUT:");
                println!("{json}");
            }
        }
    }

    println!("\n{}", rule());
    println!("ANALYSIS COMPLETE");
    println!("{}", rule());
    Ok(0)
}
