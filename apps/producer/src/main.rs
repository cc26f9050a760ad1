//! # Aegis Producer
//!
//! Generates synthetic social posts and writes them to the event stream.

use std::sync::Arc;

use anyhow::Context;

use aegis_core::PostGenerator;
use aegis_core::ports::EventStream;
use aegis_infra::aws::ensure_credentials;
use aegis_infra::{InMemoryStream, KinesisStream};

mod config;
mod producer;
mod telemetry;

use config::{ProducerConfig, StreamBackend};
use producer::Producer;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = ProducerConfig::from_env();

    tracing::info!(
        stream = %config.stream_name,
        region = %config.aws.region,
        backend = ?config.backend,
        "Initializing event producer"
    );

    let stream = build_stream(&config).await?;
    let generator = PostGenerator::new().with_crisis_probability(config.crisis_probability)?;
    let mut producer = Producer::new(stream, generator);

    producer
        .run(config.post_count, config.interval, shutdown_signal())
        .await;

    Ok(())
}

async fn build_stream(config: &ProducerConfig) -> anyhow::Result<Arc<dyn EventStream>> {
    match config.backend {
        StreamBackend::Memory => {
            tracing::warn!("Using in-memory stream - records will not leave this process");
            Ok(Arc::new(InMemoryStream::default()))
        }
        StreamBackend::Kinesis => {
            let sdk_config = config.aws.load().await;

            if let Err(e) = ensure_credentials(&sdk_config).await {
                tracing::error!(
                    error = %e,
                    "FATAL: AWS credentials not found. Run 'aws configure' and set up your IAM user's keys."
                );
                return Err(e).context("cannot start producer without AWS credentials");
            }

            Ok(Arc::new(KinesisStream::from_sdk_config(
                &sdk_config,
                config.stream_name.clone(),
            )))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
