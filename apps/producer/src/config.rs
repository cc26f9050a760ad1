//! Producer configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use aegis_core::pipeline::DEFAULT_CRISIS_PROBABILITY;
use aegis_infra::AwsConfig;

pub const DEFAULT_STREAM_NAME: &str = "aegis-social-events";

/// Where posts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamBackend {
    Kinesis,
    /// Dry run: records stay in process memory.
    Memory,
}

impl StreamBackend {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "memory" | "in-memory" => StreamBackend::Memory,
            _ => StreamBackend::Kinesis,
        }
    }
}

/// Producer configuration.
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    pub stream_name: String,
    pub aws: AwsConfig,
    pub post_count: usize,
    pub interval: Duration,
    pub crisis_probability: f64,
    pub backend: StreamBackend,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            aws: AwsConfig::default(),
            post_count: 100,
            interval: Duration::from_secs(2),
            crisis_probability: DEFAULT_CRISIS_PROBABILITY,
            backend: StreamBackend::Kinesis,
        }
    }
}

impl ProducerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            stream_name: env::var("KINESIS_STREAM_NAME").unwrap_or(defaults.stream_name),
            aws: AwsConfig::from_env(),
            post_count: env::var("PRODUCER_POST_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.post_count),
            interval: env::var("PRODUCER_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.interval),
            crisis_probability: env::var("PRODUCER_CRISIS_PROBABILITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.crisis_probability),
            backend: env::var("STREAM_BACKEND")
                .map(|v| StreamBackend::parse(&v))
                .unwrap_or(defaults.backend),
        }
    }
}
