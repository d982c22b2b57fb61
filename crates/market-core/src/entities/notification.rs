//! Push notification record handed to a notification sink

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushNotification {
    pub user_id: Snowflake,
    pub content: String,
    pub requested_at: DateTime<Utc>,
}

impl PushNotification {
    pub fn new(user_id: Snowflake, content: String) -> Self {
        Self {
            user_id,
            content,
            requested_at: Utc::now(),
        }
    }

    /// Single-line rendering used by file-backed sinks
    pub fn to_log_line(&self) -> String {
        format!(
            "{} user={} content={:?}",
            self.requested_at.to_rfc3339(),
            self.user_id,
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_contains_user_and_content() {
        let push = PushNotification::new(Snowflake::new(42), "Hello there".to_string());
        let line = push.to_log_line();
        assert!(line.contains("user=42"));
        assert!(line.contains("\"Hello there\""));
        assert!(!line.contains('\n'));
    }
}
