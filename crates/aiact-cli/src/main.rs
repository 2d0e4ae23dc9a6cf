//! # aiact CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aiact_analyzer::ComplianceAnalyzer;
use aiact_cli::analyze::{run_analyze, AnalyzeArgs};
use aiact_cli::config::load_analyzer_config;
use aiact_cli::demo::{run_demo, DemoArgs};

/// EU AI Act Compliance CLI
///
/// Classifies AI systems into EU AI Act risk tiers, assesses the applicable
/// requirements and prints prioritized recommendations.
#[derive(Parser, Debug)]
#[command(name = "aiact", version, about, long_about = None)]
struct Cli {
    /// Verbose output. Repeat for more log detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML or JSON analyzer configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze the built-in sample systems.
    Demo(DemoArgs),

    /// Validate and analyze a system description file.
    Analyze(AnalyzeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_analyzer_config(cli.config.as_deref()).and_then(|config| {
        let analyzer = ComplianceAnalyzer::new(config);
        let verbose = cli.verbose > 0;
        match &cli.command {
            Commands::Demo(args) => run_demo(args, &analyzer, verbose),
            Commands::Analyze(args) => run_analyze(args, &analyzer, verbose),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}
