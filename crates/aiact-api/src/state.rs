//! # Application State
//!
//! Configuration loaded once at startup and the shared state handed to
//! every route handler via the `State` extractor.
//!
//! The analyzer is stateless, so the whole `AppState` is a handful of
//! `Arc`s and is cheap to clone per request.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use thiserror::Error;

use aiact_analyzer::{AnalyzerConfig, ComplianceAnalyzer, SynthesisStrategy};
use aiact_core::{DescriptionLimits, DEFAULT_MAX_DESCRIPTION_LENGTH};

/// Service version reported by `/` and the health probes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_APP_NAME: &str = "EU AI Act Compliance Bot";
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:8000",
    "https://eu-ai-act-bot.vercel.app",
];

// -- Configuration ------------------------------------------------------------

/// Startup configuration failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected text or json, got {other}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    pub app_name: String,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Maximum accepted description length in characters.
    pub max_analysis_length: usize,
    pub synthesis: SynthesisStrategy,
    /// Requests allowed per client per window.
    pub rate_limit_requests: u64,
    /// Rate limit window in seconds.
    pub rate_limit_period_secs: u64,
    pub metrics_enabled: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            app_name: DEFAULT_APP_NAME.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            max_analysis_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            synthesis: SynthesisStrategy::default(),
            rate_limit_requests: 100,
            rate_limit_period_secs: 3600,
            metrics_enabled: true,
            log_format: LogFormat::default(),
        }
    }
}

fn parse_var<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    let parsed: Result<T, T::Err> = value.trim().parse();
    parsed.map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

fn parse_bool(var: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let normalized = raw.as_deref().map(|v| v.trim().to_ascii_lowercase());
    match normalized.as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            var,
            value: raw.unwrap_or_default(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables take their default; set but unparseable variables
    /// are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        let max_analysis_length =
            parse_var("MAX_ANALYSIS_LENGTH", lookup("MAX_ANALYSIS_LENGTH"), defaults.max_analysis_length)?;
        if max_analysis_length < aiact_core::DEFAULT_MIN_DESCRIPTION_LENGTH {
            return Err(ConfigError::Invalid {
                var: "MAX_ANALYSIS_LENGTH",
                value: max_analysis_length.to_string(),
                reason: "must not be below the minimum description length".to_string(),
            });
        }

        let rate_limit_period_secs =
            parse_var("RATE_LIMIT_PERIOD", lookup("RATE_LIMIT_PERIOD"), defaults.rate_limit_period_secs)?;
        if rate_limit_period_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "RATE_LIMIT_PERIOD",
                value: "0".to_string(),
                reason: "window must be at least one second".to_string(),
            });
        }

        Ok(Self {
            port: parse_var("PORT", lookup("PORT"), defaults.port)?,
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            cors_origins,
            max_analysis_length,
            synthesis: parse_var("SYNTHESIS_STRATEGY", lookup("SYNTHESIS_STRATEGY"), defaults.synthesis)?,
            rate_limit_requests: parse_var(
                "RATE_LIMIT_REQUESTS",
                lookup("RATE_LIMIT_REQUESTS"),
                defaults.rate_limit_requests,
            )?,
            rate_limit_period_secs,
            metrics_enabled: parse_bool("METRICS_ENABLED", lookup("METRICS_ENABLED"), defaults.metrics_enabled)?,
            log_format: parse_var("LOG_FORMAT", lookup("LOG_FORMAT"), defaults.log_format)?,
        })
    }

    /// Analyzer configuration derived from the service settings.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_description_length: self.max_analysis_length,
            synthesis: self.synthesis,
            ..AnalyzerConfig::default()
        }
    }

    /// Description bounds enforced on incoming requests.
    pub fn description_limits(&self) -> DescriptionLimits {
        self.analyzer_config().description_limits()
    }
}

// -- Shared State -------------------------------------------------------------

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<ComplianceAnalyzer>,
    /// Process start, wall clock.
    pub started_at: DateTime<Utc>,
    started: Instant,
    /// Prometheus render handle; `None` when no recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl AppState {
    /// Create state with default configuration and no metrics recorder.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// Create state from an explicit configuration.
    pub fn with_config(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        let analyzer = ComplianceAnalyzer::new(config.analyzer_config());
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(analyzer),
            started_at: Utc::now(),
            started: Instant::now(),
            metrics,
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
