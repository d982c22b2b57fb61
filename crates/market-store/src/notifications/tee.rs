//! Sink that forwards each push to several sinks

use std::sync::Arc;

use market_core::entities::PushNotification;
use market_core::traits::NotificationSink;

#[derive(Clone, Default)]
pub struct TeeNotificationSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl TeeNotificationSink {
    pub fn new(sinks: Vec<Arc<dyn NotificationSink>>) -> Self {
        Self { sinks }
    }

    pub fn push_sink(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }
}

impl NotificationSink for TeeNotificationSink {
    fn record(&self, push: &PushNotification) {
        for sink in &self.sinks {
            sink.record(push);
        }
    }
}

impl std::fmt::Debug for TeeNotificationSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeeNotificationSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
