//! Record enrichment - decode, validate, analyze, emit.

use std::fmt;
use std::sync::Arc;

use crate::domain::{EnrichedPost, IncomingPost};
use crate::error::RecordError;
use crate::ports::{EnrichedSink, TextAnalyzer};

/// Largest content, in UTF-8 bytes, the analysis service accepts.
pub const MAX_CONTENT_BYTES: usize = 5000;

pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Why a well-formed post was not analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyContent,
    Oversized { bytes: usize, limit: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyContent => f.write_str("empty content"),
            SkipReason::Oversized { bytes, limit } => {
                write!(f, "content is {bytes} bytes, limit is {limit}")
            }
        }
    }
}

/// What happened to a record that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Enriched { post_id: String },
    Skipped { post_id: String, reason: SkipReason },
}

/// Per-batch tally of record outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub received: usize,
    pub enriched: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, result: &Result<RecordOutcome, RecordError>) {
        self.received += 1;
        match result {
            Ok(RecordOutcome::Enriched { .. }) => self.enriched += 1,
            Ok(RecordOutcome::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Turns raw stream payloads into [`EnrichedPost`]s.
///
/// Holds injected handles to the analysis backend and the output sink.
#[derive(Clone)]
pub struct Enricher {
    analyzer: Arc<dyn TextAnalyzer>,
    sink: Arc<dyn EnrichedSink>,
    language_code: String,
    max_content_bytes: usize,
}

impl Enricher {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, sink: Arc<dyn EnrichedSink>) -> Self {
        Self {
            analyzer,
            sink,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            max_content_bytes: MAX_CONTENT_BYTES,
        }
    }

    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    /// Enrich one decoded record payload (a UTF-8 JSON post object).
    pub async fn enrich_payload(&self, payload: &[u8]) -> Result<RecordOutcome, RecordError> {
        let text = std::str::from_utf8(payload)?;
        let post: IncomingPost = serde_json::from_str(text)?;
        self.enrich_post(post).await
    }

    /// Validate, analyze and emit a single post.
    pub async fn enrich_post(&self, post: IncomingPost) -> Result<RecordOutcome, RecordError> {
        tracing::info!(post_id = %post.post_id, "Processing post");

        if let Some(reason) = self.check_content(&post) {
            tracing::info!(post_id = %post.post_id, reason = %reason, "Skipping post");
            return Ok(RecordOutcome::Skipped {
                post_id: post.post_id,
                reason,
            });
        }

        let sentiment = self
            .analyzer
            .detect_sentiment(&post.content, &self.language_code)
            .await?;
        let key_phrases = self
            .analyzer
            .detect_key_phrases(&post.content, &self.language_code)
            .await?;

        let post_id = post.post_id.clone();
        let enriched = EnrichedPost::new(post, sentiment, key_phrases);
        self.sink.emit(&enriched).await?;

        Ok(RecordOutcome::Enriched { post_id })
    }

    fn check_content(&self, post: &IncomingPost) -> Option<SkipReason> {
        let bytes = post.content_bytes();
        if bytes == 0 {
            Some(SkipReason::EmptyContent)
        } else if bytes > self.max_content_bytes {
            Some(SkipReason::Oversized {
                bytes,
                limit: self.max_content_bytes,
            })
        } else {
            None
        }
    }
}
