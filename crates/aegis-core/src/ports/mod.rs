//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod analyzer;
mod sink;
mod stream;

pub use analyzer::{AnalysisError, TextAnalyzer};
pub use sink::{EnrichedSink, SinkError};
pub use stream::{EventStream, PutReceipt, StreamError};
