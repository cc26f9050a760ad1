use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platforms the producer generates posts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "X-Twitter")]
    XTwitter,
    #[serde(rename = "Reddit")]
    Reddit,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::XTwitter, Platform::Reddit];

    /// Wire label, also used as the stream partition key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::XTwitter => "X-Twitter",
            Platform::Reddit => "Reddit",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SocialPost entity - one synthetic post as written to the stream.
///
/// `platform` stays a plain string so records from other producers, with
/// labels outside [`Platform`], still parse on the consumer side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub post_id: String,
    pub platform: String,
    pub content: String,
    pub author_id: String,
    pub timestamp_utc: DateTime<Utc>,
}

impl SocialPost {
    /// Create a new post with a fresh id, stamped with the current time.
    pub fn new(platform: Platform, content: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            post_id: Uuid::new_v4().to_string(),
            platform: platform.as_str().to_string(),
            content: content.into(),
            author_id: author_id.into(),
            timestamp_utc: Utc::now(),
        }
    }

    /// Partition key used when writing this post to the stream.
    pub fn partition_key(&self) -> &str {
        &self.platform
    }
}

/// A post as read back from the stream on the consumer side.
///
/// Only `post_id` and `content` are typed. Every other field, including
/// `timestamp_utc`, is carried through verbatim so the enriched output is
/// the original record plus analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingPost {
    pub post_id: String,
    pub content: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl IncomingPost {
    /// Size of the content in UTF-8 bytes.
    pub fn content_bytes(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let post = SocialPost::new(Platform::Reddit, "Thinking about @AegisSocial.", "user_4242");

        let json = serde_json::to_string(&post).unwrap();
        let decoded: SocialPost = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, post);
    }

    #[test]
    fn test_platform_serializes_as_wire_label() {
        let post = SocialPost::new(Platform::XTwitter, "hello", "user_1000");
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["platform"], "X-Twitter");
        assert_eq!(post.partition_key(), "X-Twitter");
    }

    #[test]
    fn test_parses_python_style_timestamp() {
        let json = r#"{
            "post_id": "abc",
            "platform": "Mastodon",
            "content": "hi",
            "author_id": "user_1234",
            "timestamp_utc": "2024-05-01T12:30:00.123456+00:00"
        }"#;

        let post: SocialPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.platform, "Mastodon");
        assert_eq!(post.timestamp_utc.to_rfc3339(), "2024-05-01T12:30:00.123456+00:00");
    }

    #[test]
    fn test_incoming_post_keeps_wire_fields_verbatim() {
        let json = r#"{
            "post_id": "abc",
            "platform": "Reddit",
            "content": "héllo",
            "author_id": "user_1234",
            "timestamp_utc": "2024-05-01T12:30:00.123456",
            "lang": "en-US"
        }"#;

        let post: IncomingPost = serde_json::from_str(json).unwrap();

        assert_eq!(post.content_bytes(), 6);
        assert_eq!(post.fields["timestamp_utc"], "2024-05-01T12:30:00.123456");
        assert_eq!(post.fields["lang"], "en-US");
        assert!(!post.fields.contains_key("post_id"));
    }

    #[test]
    fn test_incoming_post_reads_producer_output() {
        let post = SocialPost::new(Platform::XTwitter, "hello", "user_1000");
        let json = serde_json::to_vec(&post).unwrap();

        let incoming: IncomingPost = serde_json::from_slice(&json).unwrap();

        assert_eq!(incoming.post_id, post.post_id);
        assert_eq!(incoming.fields["platform"], "X-Twitter");
        assert_eq!(
            serde_json::to_value(&incoming).unwrap(),
            serde_json::to_value(&post).unwrap()
        );
    }
}
