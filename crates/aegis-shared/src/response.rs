//! Status object returned to the trigger after each batch.

use serde::{Deserialize, Serialize};

/// HTTP-style batch response.
///
/// `body` holds a JSON-encoded string, so the message arrives quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl BatchResponse {
    /// Success response covering a batch of `count` records.
    pub fn processed(count: usize) -> Self {
        let message = format!("Successfully processed {count} records.");
        Self {
            status_code: 200,
            body: serde_json::Value::String(message).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_response_shape() {
        let response = BatchResponse::processed(3);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "\"Successfully processed 3 records.\"");
    }
}
