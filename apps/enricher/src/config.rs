//! Enricher configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use aegis_core::pipeline::DEFAULT_LANGUAGE_CODE;
use aegis_infra::AwsConfig;

/// Which text analysis backend to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerBackend {
    Comprehend,
    /// Offline word lists, no network calls.
    Lexicon,
}

impl AnalyzerBackend {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "lexicon" | "offline" => AnalyzerBackend::Lexicon,
            _ => AnalyzerBackend::Comprehend,
        }
    }
}

/// Enricher configuration.
#[derive(Debug, Clone)]
pub struct EnricherConfig {
    pub aws: AwsConfig,
    pub analyzer: AnalyzerBackend,
    pub language_code: String,
    /// Process this trigger event file once instead of serving invocations.
    pub event_file: Option<PathBuf>,
}

impl EnricherConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            aws: AwsConfig::from_env(),
            analyzer: env::var("ANALYZER_BACKEND")
                .map(|v| AnalyzerBackend::parse(&v))
                .unwrap_or(AnalyzerBackend::Comprehend),
            language_code: env::var("ANALYSIS_LANGUAGE_CODE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE_CODE.to_string()),
            event_file: env::var("ENRICHER_EVENT_FILE").ok().map(PathBuf::from),
        }
    }
}
