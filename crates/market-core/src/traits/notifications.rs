//! Notification sink trait

use crate::entities::PushNotification;

/// Destination for simulated push notifications.
///
/// Delivery is fire-and-forget: a sink reports nothing back, and a sink that
/// cannot record a push must not fail the caller.
pub trait NotificationSink: Send + Sync {
    fn record(&self, push: &PushNotification);
}
