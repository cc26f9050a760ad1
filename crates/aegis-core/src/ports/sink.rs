use async_trait::async_trait;

use crate::domain::EnrichedPost;

/// Destination for enriched posts (log output, in-memory collector).
#[async_trait]
pub trait EnrichedSink: Send + Sync {
    async fn emit(&self, post: &EnrichedPost) -> Result<(), SinkError>;
}

/// Sink errors.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to emit: {0}")]
    Emit(String),
}
