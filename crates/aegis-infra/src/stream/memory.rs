//! In-memory event stream implementation.
//!
//! This is a stand-in when Kinesis is not available (dry runs, tests).
//! Works within a single process only.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use aegis_core::ports::{EventStream, PutReceipt, StreamError};

/// A record held by [`InMemoryStream`].
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub partition_key: String,
    pub shard_id: String,
    pub sequence_number: String,
    pub data: Vec<u8>,
}

/// In-memory stream that routes records to shards by partition key hash.
pub struct InMemoryStream {
    records: RwLock<Vec<StoredRecord>>,
    shard_count: u64,
    next_sequence: AtomicU64,
}

impl InMemoryStream {
    pub fn new(shard_count: u64) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            shard_count: shard_count.max(1),
            next_sequence: AtomicU64::new(1),
        }
    }

    fn shard_for(&self, partition_key: &str) -> String {
        let mut hasher = DefaultHasher::new();
        partition_key.hash(&mut hasher);
        format!("shardId-{:012}", hasher.finish() % self.shard_count)
    }

    /// Snapshot of every stored record, in write order.
    pub async fn records(&self) -> Vec<StoredRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryStream {
    fn default() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl EventStream for InMemoryStream {
    async fn put_record(
        &self,
        partition_key: &str,
        data: Vec<u8>,
    ) -> Result<PutReceipt, StreamError> {
        if partition_key.is_empty() {
            return Err(StreamError::Put("partition key must not be empty".to_string()));
        }

        let shard_id = self.shard_for(partition_key);
        let sequence_number = self
            .next_sequence
            .fetch_add(1, Ordering::Relaxed)
            .to_string();

        self.records.write().await.push(StoredRecord {
            partition_key: partition_key.to_string(),
            shard_id: shard_id.clone(),
            sequence_number: sequence_number.clone(),
            data,
        });

        tracing::debug!(
            partition_key = %partition_key,
            shard_id = %shard_id,
            sequence_number = %sequence_number,
            "Record stored"
        );

        Ok(PutReceipt {
            shard_id,
            sequence_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_read_back() {
        let stream = InMemoryStream::default();
        let receipt = stream.put_record("Reddit", b"one".to_vec()).await.unwrap();

        assert_eq!(receipt.shard_id, "shardId-000000000000");
        assert_eq!(receipt.sequence_number, "1");

        let records = stream.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].partition_key, "Reddit");
        assert_eq!(records[0].data, b"one");
    }

    #[tokio::test]
    async fn test_same_key_routes_to_same_shard() {
        let stream = InMemoryStream::new(4);
        let first = stream.put_record("X-Twitter", vec![1]).await.unwrap();
        let second = stream.put_record("X-Twitter", vec![2]).await.unwrap();

        assert_eq!(first.shard_id, second.shard_id);
        assert_ne!(first.sequence_number, second.sequence_number);
    }

    #[tokio::test]
    async fn test_empty_partition_key_is_rejected() {
        let stream = InMemoryStream::default();
        assert!(stream.put_record("", vec![1]).await.is_err());
        assert!(stream.is_empty().await);
    }
}
