//! Log output sink.

use async_trait::async_trait;

use aegis_core::domain::EnrichedPost;
use aegis_core::ports::{EnrichedSink, SinkError};

/// Writes each enriched post to the log as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EnrichedSink for TracingSink {
    async fn emit(&self, post: &EnrichedPost) -> Result<(), SinkError> {
        let body =
            serde_json::to_string_pretty(post).map_err(|e| SinkError::Emit(e.to_string()))?;

        tracing::info!(
            post_id = %post.post.post_id,
            sentiment = ?post.analysis_results.sentiment,
            "--- ENRICHED POST ---\n{}",
            body
        );
        Ok(())
    }
}
