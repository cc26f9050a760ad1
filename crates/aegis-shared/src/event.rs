//! Kinesis trigger event envelope.
//!
//! Only the fields the enricher reads are typed; everything else the trigger
//! sends is ignored on deserialization. An entry that does not have the
//! expected shape is kept as raw JSON so it fails on its own, not the batch.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A batch of stream records delivered in one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KinesisEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

/// One entry of a trigger batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRecord {
    Kinesis(KinesisEventRecord),
    Unrecognized(serde_json::Value),
}

/// A well-formed Kinesis record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisEventRecord {
    pub kinesis: KinesisRecordData,
    #[serde(rename = "eventID", default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(rename = "eventSourceARN", default, skip_serializing_if = "Option::is_none")]
    pub event_source_arn: Option<String>,
}

/// Stream-level record fields. `data` is base64 text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisRecordData {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

/// Why a record's data could not be recovered.
#[derive(Debug, thiserror::Error)]
pub enum RecordDataError {
    #[error("record has no string kinesis.data field")]
    MissingData,

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
}

impl KinesisEventRecord {
    /// Build a record carrying `payload`, encoded the way the trigger does.
    pub fn from_payload(partition_key: impl Into<String>, payload: &[u8]) -> Self {
        Self {
            kinesis: KinesisRecordData {
                data: STANDARD.encode(payload),
                partition_key: Some(partition_key.into()),
                sequence_number: None,
            },
            event_id: None,
            event_source: Some("aws:kinesis".to_string()),
            event_source_arn: None,
        }
    }

    /// Decode the transport encoding of the record data.
    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.kinesis.data.as_bytes())
    }
}

impl EventRecord {
    /// Decoded record data, or why there is none.
    pub fn decode_data(&self) -> Result<Vec<u8>, RecordDataError> {
        match self {
            EventRecord::Kinesis(record) => Ok(record.decode_data()?),
            EventRecord::Unrecognized(_) => Err(RecordDataError::MissingData),
        }
    }

    /// Best identifier available for log lines.
    pub fn label(&self) -> &str {
        let label = match self {
            EventRecord::Kinesis(record) => record
                .event_id
                .as_deref()
                .or(record.kinesis.sequence_number.as_deref()),
            EventRecord::Unrecognized(value) => {
                value.get("eventID").and_then(serde_json::Value::as_str)
            }
        };
        label.unwrap_or("unknown")
    }
}

impl From<KinesisEventRecord> for EventRecord {
    fn from(record: KinesisEventRecord) -> Self {
        EventRecord::Kinesis(record)
    }
}

impl KinesisEvent {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
