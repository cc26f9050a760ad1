//! In-memory sink - collects enriched posts for inspection.
//! Note: Contents are lost on process exit.

use async_trait::async_trait;
use tokio::sync::RwLock;

use aegis_core::domain::EnrichedPost;
use aegis_core::ports::{EnrichedSink, SinkError};

pub struct InMemorySink {
    posts: RwLock<Vec<EnrichedPost>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of emitted posts, in emit order.
    pub async fn posts(&self) -> Vec<EnrichedPost> {
        self.posts.read().await.clone()
    }
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnrichedSink for InMemorySink {
    async fn emit(&self, post: &EnrichedPost) -> Result<(), SinkError> {
        self.posts.write().await.push(post.clone());
        Ok(())
    }
}
