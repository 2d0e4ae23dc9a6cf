//! # Document Loading
//!
//! Reads analyzer configuration and system descriptions from JSON or YAML
//! files. Files ending in `.json` are parsed as JSON, everything else as
//! YAML (which also accepts JSON).

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use aiact_analyzer::AnalyzerConfig;

/// Parse a JSON or YAML document from `path`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON from {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }
}

/// Analyzer configuration from `--config`, or defaults when absent.
pub fn load_analyzer_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    let Some(path) = path else {
        return Ok(AnalyzerConfig::default());
    };
    let config: AnalyzerConfig = read_document(path)?;
    if config.min_description_length > config.max_description_length {
        anyhow::bail!(
            "invalid config {}: min_description_length {} exceeds max_description_length {}",
            path.display(),
            config.min_description_length,
            config.max_description_length
        );
    }
    tracing::debug!(path = %path.display(), synthesis = %config.synthesis, "loaded analyzer config");
    Ok(config)
}
