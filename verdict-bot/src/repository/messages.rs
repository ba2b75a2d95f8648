//! Messages repository
//!
//! Delivers notification text to the configured chat.

use async_trait::async_trait;
use verdict_client::{ClientError, TelegramClient};

/// Repository trait for delivering notifications
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `message` to the fixed destination chat
    ///
    /// Best effort: a failure is reported to the caller and not retried.
    async fn deliver(&self, message: &str) -> Result<(), ClientError>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a repository bound to one chat
    ///
    /// # Arguments
    /// * `client` - Telegram Bot API client
    /// * `chat_id` - Destination chat identifier
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn deliver(&self, message: &str) -> Result<(), ClientError> {
        self.client.send_message(&self.chat_id, message).await
    }
}
