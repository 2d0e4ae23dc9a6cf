//! # aiact-cli - EU AI Act Compliance Command-Line Interface
//!
//! A clap-based harness around [`aiact_analyzer::ComplianceAnalyzer`].
//!
//! ## Subcommands
//!
//! - `demo` - Analyze the built-in sample systems
//! - `analyze` - Validate and analyze a JSON or YAML system description
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in their modules.
//! - Handlers delegate to the analyzer; no compliance logic here.
//! - Handlers return an exit code; errors carry `anyhow` context.

pub mod analyze;
pub mod config;
pub mod demo;
pub mod render;
pub mod samples;
