//! Amazon Kinesis event stream implementation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_kinesis::Client;
use aws_sdk_kinesis::error::{DisplayErrorContext, SdkError};
use aws_sdk_kinesis::primitives::Blob;

use aegis_core::ports::{EventStream, PutReceipt, StreamError};

/// Kinesis-backed event stream. One `PutRecord` call per record.
pub struct KinesisStream {
    client: Client,
    stream_name: String,
}

impl KinesisStream {
    pub fn new(client: Client, stream_name: impl Into<String>) -> Self {
        Self {
            client,
            stream_name: stream_name.into(),
        }
    }

    /// Build a client from a loaded SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig, stream_name: impl Into<String>) -> Self {
        let stream = Self::new(Client::new(config), stream_name);
        tracing::info!(stream = %stream.stream_name, "Kinesis client initialized");
        stream
    }
}

#[async_trait]
impl EventStream for KinesisStream {
    async fn put_record(
        &self,
        partition_key: &str,
        data: Vec<u8>,
    ) -> Result<PutReceipt, StreamError> {
        let output = self
            .client
            .put_record()
            .stream_name(&self.stream_name)
            .partition_key(partition_key)
            .data(Blob::new(data))
            .send()
            .await
            .map_err(|e| match &e {
                SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                    StreamError::Connection(DisplayErrorContext(&e).to_string())
                }
                _ => StreamError::Put(DisplayErrorContext(&e).to_string()),
            })?;

        Ok(PutReceipt {
            shard_id: output.shard_id().to_string(),
            sequence_number: output.sequence_number().to_string(),
        })
    }
}
