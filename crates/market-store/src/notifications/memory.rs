//! Sink that keeps every push in memory

use parking_lot::RwLock;

use market_core::entities::PushNotification;
use market_core::traits::NotificationSink;
use market_core::value_objects::Snowflake;

#[derive(Debug, Default)]
pub struct InMemoryNotificationLog {
    pushes: RwLock<Vec<PushNotification>>,
}

impl InMemoryNotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded push, oldest first
    pub fn pushes(&self) -> Vec<PushNotification> {
        self.pushes.read().clone()
    }

    /// Pushes addressed to `user_id`
    pub fn pushes_for(&self, user_id: Snowflake) -> Vec<PushNotification> {
        self.pushes
            .read()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pushes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pushes.read().is_empty()
    }
}

impl NotificationSink for InMemoryNotificationLog {
    fn record(&self, push: &PushNotification) {
        self.pushes.write().push(push.clone());
    }
}
