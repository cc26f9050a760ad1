//! Domain entities - the records that flow through the pipeline.

mod analysis;
mod post;

pub use analysis::{AnalysisResults, EnrichedPost, Sentiment, SentimentAnalysis, SentimentScore};
pub use post::{IncomingPost, Platform, SocialPost};
