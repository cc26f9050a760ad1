//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AnalysisError, SinkError};

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Failure while turning one stream record into an enriched post.
///
/// Every variant is contained to the record that produced it.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record data is not valid base64: {0}")]
    Encoding(String),

    #[error("Record data is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Record is not a valid social post: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Text analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Emitting enriched post failed: {0}")]
    Sink(#[from] SinkError),
}
