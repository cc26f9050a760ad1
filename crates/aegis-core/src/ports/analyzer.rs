//! Text analysis port.

use async_trait::async_trait;

use crate::domain::SentimentAnalysis;

/// Text analyzer trait - abstraction over NLP backends (Comprehend, lexicon).
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    /// Detect the dominant sentiment of `text`.
    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentAnalysis, AnalysisError>;

    /// Extract key phrases from `text`, in the order the backend reports them.
    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, AnalysisError>;
}

/// Text analysis errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis service error: {0}")]
    Service(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
