//! Offline lexicon analyzer.
//!
//! Used when Comprehend is not reachable (local runs, tests). Sentiment comes
//! from word lists, key phrases are the mentions and hashtags of the text.

use async_trait::async_trait;

use aegis_core::domain::{Sentiment, SentimentAnalysis, SentimentScore};
use aegis_core::pipeline::MAX_CONTENT_BYTES;
use aegis_core::ports::{AnalysisError, TextAnalyzer};

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "great", "helpful", "quick", "love", "excellent", "awesome", "good", "innovation",
    "happy", "fantastic",
];

const NEGATIVE_WORDS: &[&str] = &[
    "frustrating", "worst", "disaster", "leaked", "scandal", "breach", "databreach", "exposed",
    "scam", "scamalert", "unacceptable", "fail", "bug", "down", "issues", "flaw", "avoid",
    "wiped", "dataloss", "privacyfail", "ghost", "not",
];

/// Word-list analyzer with the same contract as the managed service.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn validate(text: &str) -> Result<(), AnalysisError> {
        if text.is_empty() {
            return Err(AnalysisError::InvalidInput("text is empty".to_string()));
        }
        if text.len() > MAX_CONTENT_BYTES {
            return Err(AnalysisError::InvalidInput(format!(
                "text is {} bytes, limit is {MAX_CONTENT_BYTES}",
                text.len()
            )));
        }
        Ok(())
    }

    fn score(text: &str) -> SentimentAnalysis {
        let (mut positive, mut negative) = (0u32, 0u32);
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }

        let mixed = positive.min(negative) as f32;
        let weights = [positive as f32, negative as f32, 1.0, mixed];
        let total: f32 = weights.iter().sum();
        let score = SentimentScore {
            positive: weights[0] / total,
            negative: weights[1] / total,
            neutral: weights[2] / total,
            mixed: weights[3] / total,
        };

        let sentiment = match positive.cmp(&negative) {
            _ if positive == 0 && negative == 0 => Sentiment::Neutral,
            std::cmp::Ordering::Equal => Sentiment::Mixed,
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
        };

        SentimentAnalysis { sentiment, score }
    }

    fn phrases(text: &str) -> Vec<String> {
        let mut phrases: Vec<String> = Vec::new();
        for token in text.split_whitespace() {
            if !(token.starts_with('@') || token.starts_with('#')) {
                continue;
            }
            let token = token.trim_end_matches(|c: char| !c.is_alphanumeric() && c != '_');
            let token = token.strip_suffix("'s").unwrap_or(token);
            if token.len() > 1 && !phrases.iter().any(|p| p == token) {
                phrases.push(token.to_string());
            }
        }
        phrases
    }
}

#[async_trait]
impl TextAnalyzer for LexiconAnalyzer {
    async fn detect_sentiment(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<SentimentAnalysis, AnalysisError> {
        Self::validate(text)?;
        Ok(Self::score(text))
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        _language_code: &str,
    ) -> Result<Vec<String>, AnalysisError> {
        Self::validate(text)?;
        Ok(Self::phrases(text))
    }
}
