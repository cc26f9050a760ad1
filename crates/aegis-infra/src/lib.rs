//! # Aegis Infrastructure
//!
//! Concrete implementations of the ports defined in `aegis-core`.
//! This crate contains the stream, text analysis and output integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `kinesis` - Amazon Kinesis event stream
//! - `comprehend` - Amazon Comprehend text analysis

pub mod analysis;
pub mod sink;
pub mod stream;

#[cfg(feature = "aws")]
pub mod aws;

// Re-exports - In-Memory
pub use analysis::LexiconAnalyzer;
pub use sink::{InMemorySink, TracingSink};
pub use stream::InMemoryStream;

// Re-exports - AWS
#[cfg(feature = "aws")]
pub use aws::AwsConfig;
#[cfg(feature = "comprehend")]
pub use analysis::ComprehendAnalyzer;
#[cfg(feature = "kinesis")]
pub use stream::KinesisStream;
