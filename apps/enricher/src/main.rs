//! # Aegis Enricher
//!
//! Lambda entry point. Each invocation receives a batch of stream records,
//! enriches them with sentiment and key phrases, and logs the result.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, service_fn};

use aegis_core::Enricher;
use aegis_core::ports::TextAnalyzer;
use aegis_infra::{ComprehendAnalyzer, LexiconAnalyzer, TracingSink};
use aegis_shared::KinesisEvent;

mod config;
mod handler;
mod telemetry;

use config::{AnalyzerBackend, EnricherConfig};
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = EnricherConfig::from_env();
    let analyzer = build_analyzer(&config).await;
    let enricher = Enricher::new(analyzer, Arc::new(TracingSink::new()))
        .with_language_code(config.language_code.clone());

    if let Some(path) = &config.event_file {
        return replay(&enricher, path).await.map_err(Into::into);
    }

    let enricher = &enricher;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<KinesisEvent>| async move {
            Ok::<_, Error>(handler::handle_batch(enricher, event.payload).await)
        },
    ))
    .await
}

async fn build_analyzer(config: &EnricherConfig) -> Arc<dyn TextAnalyzer> {
    match config.analyzer {
        AnalyzerBackend::Lexicon => {
            tracing::warn!("Using offline lexicon analyzer - Comprehend will not be called");
            Arc::new(LexiconAnalyzer::new())
        }
        AnalyzerBackend::Comprehend => {
            let sdk_config = config.aws.load().await;
            Arc::new(ComprehendAnalyzer::from_sdk_config(&sdk_config))
        }
    }
}

/// Run one batch from a trigger event file and print the response.
async fn replay(enricher: &Enricher, path: &Path) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read event file {}", path.display()))?;
    let event: KinesisEvent = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a Kinesis trigger event", path.display()))?;

    let response = handler::handle_batch(enricher, event).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
