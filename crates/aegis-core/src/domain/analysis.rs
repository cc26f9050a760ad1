use serde::{Deserialize, Serialize};

use super::IncomingPost;

/// Dominant sentiment label, as reported by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

/// Per-label confidence values, summing to roughly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentScore {
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
    pub mixed: f32,
}

/// Result of one sentiment detection call.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    pub score: SentimentScore,
}

/// Analysis attached to an enriched post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub sentiment: Sentiment,
    pub sentiment_score: SentimentScore,
    pub key_phrases: Vec<String>,
}

/// The original record merged with its analysis. Built per record, emitted,
/// then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: IncomingPost,
    pub analysis_results: AnalysisResults,
}

impl EnrichedPost {
    pub fn new(
        mut post: IncomingPost,
        sentiment: SentimentAnalysis,
        key_phrases: Vec<String>,
    ) -> Self {
        // A stale analysis on the incoming record would serialize as a duplicate key.
        post.fields.remove("analysis_results");
        Self {
            post,
            analysis_results: AnalysisResults {
                sentiment: sentiment.sentiment,
                sentiment_score: sentiment.score,
                key_phrases,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incoming(json: &str) -> IncomingPost {
        serde_json::from_str(json).unwrap()
    }

    fn positive() -> SentimentAnalysis {
        SentimentAnalysis {
            sentiment: Sentiment::Positive,
            score: SentimentScore {
                positive: 0.9,
                negative: 0.02,
                neutral: 0.07,
                mixed: 0.01,
            },
        }
    }

    #[test]
    fn test_enriched_post_flattens_original_fields() {
        let post = incoming(
            r#"{"post_id":"p-1","platform":"Reddit","content":"Great app","author_id":"user_2000","timestamp_utc":"2024-05-01T12:30:00.123456+00:00"}"#,
        );
        let enriched = EnrichedPost::new(post, positive(), vec!["Great app".to_string()]);

        let value = serde_json::to_value(&enriched).unwrap();

        assert_eq!(value["post_id"], "p-1");
        assert_eq!(value["platform"], "Reddit");
        assert_eq!(value["timestamp_utc"], "2024-05-01T12:30:00.123456+00:00");
        assert_eq!(value["analysis_results"]["sentiment"], "POSITIVE");
        assert!(value["analysis_results"]["sentiment_score"]["Positive"].is_number());
        assert_eq!(value["analysis_results"]["key_phrases"][0], "Great app");
    }

    #[test]
    fn test_incoming_analysis_is_replaced() {
        let post = incoming(
            r#"{"post_id":"p-2","content":"hi","analysis_results":{"sentiment":"stale"}}"#,
        );
        let enriched = EnrichedPost::new(post, positive(), Vec::new());

        let json = serde_json::to_string(&enriched).unwrap();

        assert_eq!(json.matches("analysis_results").count(), 1);
        assert!(!json.contains("stale"));
    }
}
