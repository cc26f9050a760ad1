//! The send loop: generate, write, sleep.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use aegis_core::PostGenerator;
use aegis_core::domain::SocialPost;
use aegis_core::ports::{EventStream, PutReceipt, StreamError};

/// Failure to deliver one post.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("Failed to serialize post: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

/// Totals for one producer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: usize,
    pub failed: usize,
}

/// Writes generated posts to an event stream, one at a time.
pub struct Producer<R> {
    stream: Arc<dyn EventStream>,
    generator: PostGenerator<R>,
}

impl<R: Rng> Producer<R> {
    pub fn new(stream: Arc<dyn EventStream>, generator: PostGenerator<R>) -> Self {
        Self { stream, generator }
    }

    /// Serialize `post` and write it keyed by its platform. No retries.
    pub async fn send_post(&self, post: &SocialPost) -> Result<PutReceipt, SendError> {
        let data = serde_json::to_vec(post)?;
        let receipt = self.stream.put_record(post.partition_key(), data).await?;
        Ok(receipt)
    }

    /// Send `count` posts, sleeping `interval` after each.
    ///
    /// A failed send is logged and the loop moves on. Resolving `shutdown`
    /// stops the loop at the next sleep.
    pub async fn run(
        &mut self,
        count: usize,
        interval: Duration,
        shutdown: impl Future<Output = ()>,
    ) -> RunSummary {
        tokio::pin!(shutdown);
        let mut summary = RunSummary::default();

        tracing::info!(
            count,
            interval_ms = interval.as_millis() as u64,
            "Starting to send posts (Ctrl+C to stop early)"
        );

        for _ in 0..count {
            let post = self.generator.next_post();

            match self.send_post(&post).await {
                Ok(receipt) => {
                    summary.sent += 1;
                    tracing::info!(
                        post_id = %post.post_id,
                        shard_id = %receipt.shard_id,
                        "Sent post"
                    );
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!(post_id = %post.post_id, error = %e, "Error sending post");
                }
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::warn!("Interrupted, stopping early");
                    break;
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }

        tracing::info!(sent = summary.sent, failed = summary.failed, "Finished sending posts");
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use aegis_infra::InMemoryStream;

    use super::*;

    /// Fails every second write.
    #[derive(Default)]
    struct FlakyStream {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EventStream for FlakyStream {
        async fn put_record(
            &self,
            _partition_key: &str,
            _data: Vec<u8>,
        ) -> Result<PutReceipt, StreamError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call % 2 == 1 {
                return Err(StreamError::Connection("connection reset".to_string()));
            }
            Ok(PutReceipt {
                shard_id: "shardId-000000000000".to_string(),
                sequence_number: call.to_string(),
            })
        }
    }

    fn generator() -> PostGenerator<StdRng> {
        PostGenerator::with_rng(StdRng::seed_from_u64(42))
    }

    #[tokio::test]
    async fn test_run_writes_every_post_keyed_by_platform() {
        let stream = Arc::new(InMemoryStream::new(2));
        let mut producer = Producer::new(stream.clone(), generator());

        let summary = producer
            .run(10, Duration::ZERO, std::future::pending())
            .await;

        assert_eq!(summary, RunSummary { sent: 10, failed: 0 });

        let records = stream.records().await;
        assert_eq!(records.len(), 10);
        for record in records {
            let post: SocialPost = serde_json::from_slice(&record.data).unwrap();
            assert_eq!(record.partition_key, post.platform);
        }
    }

    #[tokio::test]
    async fn test_failed_sends_do_not_stop_the_loop() {
        let stream = Arc::new(FlakyStream::default());
        let mut producer = Producer::new(stream.clone(), generator());

        let summary = producer
            .run(5, Duration::ZERO, std::future::pending())
            .await;

        assert_eq!(summary, RunSummary { sent: 3, failed: 2 });
        assert_eq!(stream.calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_shutdown_stops_after_current_post() {
        let stream = Arc::new(InMemoryStream::default());
        let mut producer = Producer::new(stream.clone(), generator());

        let summary = producer
            .run(100, Duration::from_secs(60), std::future::ready(()))
            .await;

        assert_eq!(summary.sent, 1);
        assert_eq!(stream.len().await, 1);
    }

    #[tokio::test]
    async fn test_send_post_returns_receipt() {
        let stream = Arc::new(InMemoryStream::default());
        let producer = Producer::new(stream, generator());

        let post = SocialPost::new(aegis_core::domain::Platform::Reddit, "hello", "user_1000");
        let receipt = producer.send_post(&post).await.unwrap();

        assert_eq!(receipt.sequence_number, "1");
    }
}
