//! Amazon Comprehend text analysis implementation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_comprehend::Client;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::types::{LanguageCode, SentimentType};

use aegis_core::domain::{Sentiment, SentimentAnalysis, SentimentScore};
use aegis_core::ports::{AnalysisError, TextAnalyzer};

/// Comprehend-backed analyzer. Each method is one synchronous detect call.
pub struct ComprehendAnalyzer {
    client: Client,
}

impl ComprehendAnalyzer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a loaded SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        tracing::info!("Comprehend client initialized");
        Self::new(Client::new(config))
    }
}

fn map_sentiment(sentiment: &SentimentType) -> Result<Sentiment, AnalysisError> {
    match sentiment {
        SentimentType::Positive => Ok(Sentiment::Positive),
        SentimentType::Negative => Ok(Sentiment::Negative),
        SentimentType::Neutral => Ok(Sentiment::Neutral),
        SentimentType::Mixed => Ok(Sentiment::Mixed),
        other => Err(AnalysisError::Service(format!(
            "unrecognized sentiment label: {}",
            other.as_str()
        ))),
    }
}

#[async_trait]
impl TextAnalyzer for ComprehendAnalyzer {
    async fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentAnalysis, AnalysisError> {
        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| AnalysisError::Service(DisplayErrorContext(&e).to_string()))?;

        let sentiment = output
            .sentiment()
            .ok_or_else(|| AnalysisError::Service("response has no sentiment".to_string()))
            .and_then(map_sentiment)?;

        let score = output
            .sentiment_score()
            .map(|s| SentimentScore {
                positive: s.positive().unwrap_or_default(),
                negative: s.negative().unwrap_or_default(),
                neutral: s.neutral().unwrap_or_default(),
                mixed: s.mixed().unwrap_or_default(),
            })
            .unwrap_or_default();

        Ok(SentimentAnalysis { sentiment, score })
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<String>, AnalysisError> {
        let output = self
            .client
            .detect_key_phrases()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| AnalysisError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .key_phrases()
            .iter()
            .filter_map(|phrase| phrase.text())
            .map(str::to_string)
            .collect())
    }
}
