//! In-memory implementation of MessageRepository

use parking_lot::RwLock;

use market_core::entities::Message;
use market_core::traits::MessageRepository;
use market_core::value_objects::Snowflake;

/// Append-only, unbounded message log
#[derive(Debug, Default)]
pub struct InMemoryMessageRepository {
    log: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageRepository for InMemoryMessageRepository {
    fn create(&self, message: &Message) {
        self.log.write().push(message.clone());
    }

    // Full scan of the log: fine for a demo-sized history, an index per
    // conversation pair is needed beyond that.
    fn find_between(&self, a: Snowflake, b: Snowflake) -> Vec<Message> {
        self.log
            .read()
            .iter()
            .filter(|m| m.is_between(a, b))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.log.read().len()
    }
}
