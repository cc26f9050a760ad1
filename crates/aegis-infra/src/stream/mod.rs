//! Event stream implementations.

mod memory;

pub use memory::{InMemoryStream, StoredRecord};

#[cfg(feature = "kinesis")]
mod kinesis;
#[cfg(feature = "kinesis")]
pub use self::kinesis::KinesisStream;
