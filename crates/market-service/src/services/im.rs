//! Instant messaging service
//!
//! Stores direct messages and falls back to a push notification when the
//! receiver is offline. Online delivery is only logged.

use market_core::entities::{ContentType, Message, User};
use market_core::Snowflake;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::notification::NotificationService;

/// Instant messaging service
pub struct ImService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImService<'a> {
    /// Create a new ImService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Deliver a text message from `sender` to `receiver_id`.
    ///
    /// Returns `None`, storing nothing, if the receiver does not exist.
    pub fn receive_message(&self, sender: &User, receiver_id: Snowflake, content: &str) -> Option<Message> {
        self.send_message(sender, receiver_id, content, ContentType::Text)
    }

    /// Deliver a message of any content type.
    ///
    /// The receiver's online flag is read from the user directory at send time:
    /// online receivers get a (simulated) realtime delivery, offline receivers
    /// exactly one push notification.
    #[instrument(skip(self, sender, content), fields(sender_id = %sender.id))]
    pub fn send_message(
        &self,
        sender: &User,
        receiver_id: Snowflake,
        content: &str,
        content_type: ContentType,
    ) -> Option<Message> {
        let Some(receiver) = self.ctx.user_repo().find_by_id(receiver_id) else {
            warn!(receiver_id = %receiver_id, "Message dropped: receiver not found");
            return None;
        };

        let message = Message::with_content_type(
            self.ctx.generate_id(),
            sender.id,
            receiver.id,
            content.to_string(),
            content_type,
        );
        self.ctx.message_repo().create(&message);

        info!(
            message_id = %message.id,
            sender = %sender.nickname,
            receiver = %receiver.nickname,
            content_type = %message.content_type,
            "Message stored"
        );

        if receiver.is_online {
            info!(receiver_id = %receiver.id, "Receiver online, delivering in realtime");
        } else {
            info!(receiver_id = %receiver.id, "Receiver offline, falling back to push");
            NotificationService::new(self.ctx).trigger_push(
                receiver.id,
                &format!("You have a new message from {}", sender.nickname),
            );
        }

        Some(message)
    }

    /// Messages between two users in either direction, oldest first
    pub fn get_chat_history(&self, user1: &User, user2: &User) -> Vec<Message> {
        let mut history = self.ctx.message_repo().find_between(user1.id, user2.id);
        history.sort_by(|a, b| a.sent_at.cmp(&b.sent_at).then(a.id.cmp(&b.id)));
        history
    }

    /// Number of stored messages across all conversations
    pub fn message_count(&self) -> usize {
        self.ctx.message_repo().count()
    }
}
