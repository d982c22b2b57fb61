//! Message entity - a direct message between two users

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Kind of payload carried in `Message::content`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    #[default]
    Text,
    Image,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEXT" => Ok(Self::Text),
            "IMAGE" => Ok(Self::Image),
            other => Err(DomainError::InvalidContentType(other.to_string())),
        }
    }
}

/// Message entity. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub content: String,
    pub content_type: ContentType,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a text message
    pub fn new(id: Snowflake, sender_id: Snowflake, receiver_id: Snowflake, content: String) -> Self {
        Self::with_content_type(id, sender_id, receiver_id, content, ContentType::Text)
    }

    pub fn with_content_type(
        id: Snowflake,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        content: String,
        content_type: ContentType,
    ) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            content,
            content_type,
            sent_at: Utc::now(),
        }
    }

    /// True when the message went from `a` to `b` or from `b` to `a`
    pub fn is_between(&self, a: Snowflake, b: Snowflake) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}
