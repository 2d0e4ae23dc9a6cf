//! # Analyze Subcommand
//!
//! Validates and analyzes one system description read from a JSON or YAML
//! file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use aiact_analyzer::ComplianceAnalyzer;
use aiact_core::{ComplianceReport, SystemDescription};

use crate::config::read_document;
use crate::render::render_report;

/// Arguments for the analyze subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to a JSON or YAML system description.
    pub file: PathBuf,

    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Load, validate and analyze the system described in `path`.
pub fn analyze_file(
    path: &Path,
    analyzer: &ComplianceAnalyzer,
) -> Result<(SystemDescription, ComplianceReport)> {
    let system: SystemDescription = read_document(path)?;
    system
        .validate(&analyzer.config().description_limits())
        .with_context(|| format!("invalid system description in {}", path.display()))?;
    let report = analyzer
        .analyze(&system)
        .with_context(|| format!("analysis of '{}' failed", system.name))?;
    Ok((system, report))
}

/// Execute the analyze subcommand.
pub fn run_analyze(args: &AnalyzeArgs, analyzer: &ComplianceAnalyzer, verbose: bool) -> Result<u8> {
    let start = Instant::now();
    let (system, report) = analyze_file(&args.file, analyzer)?;
    let elapsed = start.elapsed().as_secs_f64();

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render_report(&system, &report, elapsed, verbose));
    }
    Ok(0)
}
