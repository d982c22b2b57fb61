//! Notification service
//!
//! Simulated push delivery. Every push is handed to the context's notification sink.

use market_core::entities::PushNotification;
use market_core::Snowflake;
use tracing::{info, instrument};

use super::context::ServiceContext;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a push notification to `user_id`
    #[instrument(skip(self, content))]
    pub fn trigger_push(&self, user_id: Snowflake, content: &str) {
        info!(user_id = %user_id, content = %content, "Sending push notification");
        self.ctx
            .notification_sink()
            .record(&PushNotification::new(user_id, content.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use market_store::InMemoryNotificationLog;

    use super::*;

    #[test]
    fn test_trigger_push_records_notification() {
        let log = Arc::new(InMemoryNotificationLog::new());
        let ctx = ServiceContext::in_memory_with_sink(log.clone());

        NotificationService::new(&ctx).trigger_push(Snowflake::new(7), "Order shipped");

        let pushes = log.pushes();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].user_id, Snowflake::new(7));
        assert_eq!(pushes[0].content, "Order shipped");
    }

    #[test]
    fn test_trigger_push_for_unknown_user_still_records() {
        let log = Arc::new(InMemoryNotificationLog::new());
        let ctx = ServiceContext::in_memory_with_sink(log.clone());

        NotificationService::new(&ctx).trigger_push(Snowflake::new(999), "");

        assert_eq!(log.pushes_for(Snowflake::new(999)).len(), 1);
    }
}
