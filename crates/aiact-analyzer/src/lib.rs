//! # aiact-analyzer - Rule-Based Compliance Analyzer
//!
//! Assesses an AI [`SystemDescription`](aiact_core::SystemDescription)
//! against a fixed, in-memory rule-set modeled on the EU AI Act.
//!
//! ## Pipeline
//!
//! ```text
//! classify ─▶ select ─▶ assess ─▶ synthesize ─▶ score / summarize
//! ```
//!
//! | Stage      | Module          | Output                          |
//! |------------|-----------------|---------------------------------|
//! | classify   | [`classifier`]  | `RiskCategory`                  |
//! | select     | [`catalog`]     | `Vec<RequirementRecord>`        |
//! | assess     | [`assessor`]    | `RequirementAssessment` per req |
//! | synthesize | [`synthesis`]   | priority-sorted recommendations |
//! | score      | [`scoring`]     | `f64` in `[0, 1]`               |
//! | summarize  | [`summary`]     | narrative + top-N lists         |
//!
//! Data flows strictly left to right; no stage revisits an earlier output.
//! The analyzer performs no I/O.

pub mod analyzer;
pub mod assessor;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod plans;
pub mod scoring;
pub mod summary;
pub mod synthesis;

#[cfg(test)]
pub(crate) mod testing;

pub use analyzer::ComplianceAnalyzer;
pub use config::{AnalyzerConfig, SynthesisStrategy};
