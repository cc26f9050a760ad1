//! # Aegis Shared
//!
//! Wire types exchanged with the stream trigger: the Kinesis event envelope
//! delivered to the enricher and the status object it returns.

pub mod event;
pub mod response;

pub use event::{EventRecord, KinesisEvent, KinesisEventRecord, KinesisRecordData, RecordDataError};
pub use response::BatchResponse;
