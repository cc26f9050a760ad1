//! Event stream port - abstraction over durable log backends.

use async_trait::async_trait;

/// Where the stream placed a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    pub shard_id: String,
    pub sequence_number: String,
}

/// Event stream trait - abstraction over stream backends (Kinesis, in-memory).
#[async_trait]
pub trait EventStream: Send + Sync {
    /// Write one record routed by `partition_key`.
    async fn put_record(&self, partition_key: &str, data: Vec<u8>) -> Result<PutReceipt, StreamError>;
}

/// Stream errors.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Failed to put record: {0}")]
    Put(String),
}
